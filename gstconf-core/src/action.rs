//! The action record.

use serde::Serialize;

use crate::field::Field;
use crate::scalar::Value;

/// One benchmark action descriptor.
///
/// Every field except `name` is optional in the document and defaults to
/// its zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Action {
    pub name: String,
    pub module_name: String,
    pub devices: String,
    pub count: i32,
    pub ops_type: String,
    pub target_stress: f64,
    pub duration: i32,
    pub matrix_size_a: i32,
    pub matrix_size_b: i32,
    pub matrix_size_c: i32,
    pub log_interval: i32,
    pub parallel: bool,
    pub copy_matrix: bool,
}

impl Action {
    /// Empty action with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Store a converted value.
    ///
    /// Panics if the value's variant does not match the field's kind;
    /// [`scalar::convert`](crate::scalar::convert) never produces one.
    pub(crate) fn set(&mut self, field: Field, value: Value<'_>) {
        match (field, value) {
            (Field::Name, Value::Text(s)) => self.name = s.to_owned(),
            (Field::ModuleName, Value::Text(s)) => self.module_name = s.to_owned(),
            (Field::Devices, Value::Text(s)) => self.devices = s.to_owned(),
            (Field::OpsType, Value::Text(s)) => self.ops_type = s.to_owned(),
            (Field::Count, Value::Integer(n)) => self.count = n,
            (Field::Duration, Value::Integer(n)) => self.duration = n,
            (Field::SizeA, Value::Integer(n)) => self.matrix_size_a = n,
            (Field::SizeB, Value::Integer(n)) => self.matrix_size_b = n,
            (Field::SizeC, Value::Integer(n)) => self.matrix_size_c = n,
            (Field::LogInterval, Value::Integer(n)) => self.log_interval = n,
            (Field::TargetStress, Value::Float(x)) => self.target_stress = x,
            (Field::Parallel, Value::Flag(b)) => self.parallel = b,
            (Field::CopyMatrix, Value::Flag(b)) => self.copy_matrix = b,
            (field, value) => unreachable!("{:?} cannot hold {:?}", field, value),
        }
    }

    /// Matrix dimensions `(a, b, c)`.
    pub fn matrix_sizes(&self) -> (i32, i32, i32) {
        (self.matrix_size_a, self.matrix_size_b, self.matrix_size_c)
    }
}
