use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use prost_types::Timestamp;

use crate::proto::feast::serving::get_online_features_request_v2::EntityRow;
use crate::proto::feast::serving::get_online_features_response::{FieldStatus, FieldValues};
use crate::proto::feast::types::Value;

/// One entity's fields.
///
/// On the way in a row carries the entity keys and the timestamp to look them up at.
/// On the way out it carries the retrieved values, each with a [`FieldStatus`].
///
/// Equality compares fields and statuses only; the entity timestamp is ignored.
#[derive(Clone, Debug)]
pub struct Row {
    fields: HashMap<String, Value>,
    statuses: HashMap<String, FieldStatus>,
    entity_timestamp: Timestamp,
}

impl Row {
    /// An empty row stamped with the current time, truncated to whole seconds.
    pub fn new() -> Self {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();
        Self {
            fields: HashMap::new(),
            statuses: HashMap::new(),
            entity_timestamp: Timestamp { seconds, nanos: 0 },
        }
    }

    /// Sets `field` to `value`, replacing any previous value.
    ///
    /// ```
    /// use feast_client::{Row, Value};
    ///
    /// let row = Row::new().set("driver_id", 1).set("city", "Jakarta");
    /// assert_eq!(row.get("driver_id"), Some(&Value::from(1)));
    /// ```
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets `field` to `value` together with its retrieval status.
    pub fn set_with_status(
        mut self,
        field: impl Into<String>,
        value: Value,
        status: FieldStatus,
    ) -> Self {
        let field = field.into();
        self.statuses.insert(field.clone(), status);
        self.fields.insert(field, value);
        self
    }

    pub fn set_entity_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.entity_timestamp = timestamp.into();
        self
    }

    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    pub fn statuses(&self) -> &HashMap<String, FieldStatus> {
        &self.statuses
    }

    pub fn entity_timestamp(&self) -> &Timestamp {
        &self.entity_timestamp
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn status(&self, field: &str) -> Option<FieldStatus> {
        self.statuses.get(field).copied()
    }

    /// The wire entity row: this row's timestamp and all of its fields.
    pub fn to_entity_row(&self) -> EntityRow {
        EntityRow {
            timestamp: Some(self.entity_timestamp.clone()),
            fields: self.fields.clone(),
        }
    }

    /// Decodes one entity's response entry.
    ///
    /// Servers may omit the status of a present value, so a field without a status
    /// entry (or with a status this client does not know) is recorded as `Present`.
    pub fn from_field_values(values: FieldValues) -> Self {
        let FieldValues { fields, statuses } = values;
        fields.into_iter().fold(Row::new(), |row, (name, value)| {
            let status = statuses
                .get(&name)
                .and_then(|raw| FieldStatus::try_from(*raw).ok())
                .unwrap_or(FieldStatus::Present);
            row.set_with_status(name, value, status)
        })
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields && self.statuses == other.statuses
    }
}

impl From<&Row> for EntityRow {
    fn from(val: &Row) -> Self {
        val.to_entity_row()
    }
}

impl From<FieldValues> for Row {
    fn from(val: FieldValues) -> Self {
        Row::from_field_values(val)
    }
}
