//! Action fields and the keyword table.
//!
//! Keywords are matched exactly (case-sensitive) through a compile-time
//! perfect hash map.

use std::fmt;

use phf::phf_map;

/// Top-level key that introduces the action list.
pub const SECTION_KEYWORD: &str = "actions";

/// One of the closed set of fields an action mapping may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    ModuleName,
    Devices,
    Count,
    OpsType,
    TargetStress,
    Duration,
    SizeA,
    SizeB,
    SizeC,
    LogInterval,
    Parallel,
    CopyMatrix,
}

/// How a field's scalar text is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Copied verbatim
    Text,
    /// Base-10 integer
    Integer,
    /// Decimal floating point
    Float,
    /// `true` / anything else
    Flag,
}

static KEYWORDS: phf::Map<&'static str, Field> = phf_map! {
    "name" => Field::Name,
    "module" => Field::ModuleName,
    "device" => Field::Devices,
    "count" => Field::Count,
    "ops_type" => Field::OpsType,
    "target_stress" => Field::TargetStress,
    "duration" => Field::Duration,
    "matrix_size_a" => Field::SizeA,
    "matrix_size_b" => Field::SizeB,
    "matrix_size_c" => Field::SizeC,
    "log_interval" => Field::LogInterval,
    "parallel" => Field::Parallel,
    "copy_matrix" => Field::CopyMatrix,
};

impl Field {
    /// Every field, in record order.
    pub const ALL: [Field; 13] = [
        Field::Name,
        Field::ModuleName,
        Field::Devices,
        Field::Count,
        Field::OpsType,
        Field::TargetStress,
        Field::Duration,
        Field::SizeA,
        Field::SizeB,
        Field::SizeC,
        Field::LogInterval,
        Field::Parallel,
        Field::CopyMatrix,
    ];

    /// Look up a mapping key.
    #[inline]
    pub fn from_keyword(key: &str) -> Option<Field> {
        KEYWORDS.get(key).copied()
    }

    /// The mapping key for this field.
    pub fn keyword(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::ModuleName => "module",
            Field::Devices => "device",
            Field::Count => "count",
            Field::OpsType => "ops_type",
            Field::TargetStress => "target_stress",
            Field::Duration => "duration",
            Field::SizeA => "matrix_size_a",
            Field::SizeB => "matrix_size_b",
            Field::SizeC => "matrix_size_c",
            Field::LogInterval => "log_interval",
            Field::Parallel => "parallel",
            Field::CopyMatrix => "copy_matrix",
        }
    }

    /// Name of the parser state that waits for this field's value.
    pub fn state_name(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::ModuleName => "ModuleName",
            Field::Devices => "Devices",
            Field::Count => "Count",
            Field::OpsType => "OpsType",
            Field::TargetStress => "TargetStress",
            Field::Duration => "Duration",
            Field::SizeA => "SizeA",
            Field::SizeB => "SizeB",
            Field::SizeC => "SizeC",
            Field::LogInterval => "LogInterval",
            Field::Parallel => "Parallel",
            Field::CopyMatrix => "CopyMatrix",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Name | Field::ModuleName | Field::Devices | Field::OpsType => FieldKind::Text,
            Field::Count
            | Field::Duration
            | Field::SizeA
            | Field::SizeB
            | Field::SizeC
            | Field::LogInterval => FieldKind::Integer,
            Field::TargetStress => FieldKind::Float,
            Field::Parallel | Field::CopyMatrix => FieldKind::Flag,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
