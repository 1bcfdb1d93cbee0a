//! Decoders from raw planner codes to descriptive names.
//!
//! Every function here is total: any input outside the recognized set
//! decodes to `""`. The lookups are exhaustive `match`es, so an
//! out-of-range code can never index out of bounds.

/// Relation storage kind codes.
pub mod rel_kind {
    pub const ORDINARY_TABLE: char = 'r';
    pub const INDEX: char = 'i';
    pub const SEQUENCE: char = 'S';
    pub const TOAST_TABLE: char = 't';
    pub const VIEW: char = 'v';
    pub const MATERIALIZED_VIEW: char = 'm';
    pub const COMPOSITE_TYPE: char = 'c';
    pub const FOREIGN_TABLE: char = 'f';
    pub const PARTITIONED_TABLE: char = 'p';
    pub const PARTITIONED_INDEX: char = 'I';
    pub const UNLOGGED_TABLE: char = 'u';
}

/// Range-table-entry kind codes.
pub mod rte_kind {
    pub const RELATION: i32 = 0;
    pub const SUBQUERY: i32 = 1;
    pub const JOIN: i32 = 2;
    pub const FUNCTION: i32 = 3;
    pub const TABLE_FUNC: i32 = 4;
    pub const VALUES: i32 = 5;
    pub const CTE: i32 = 6;
    pub const NAMED_TUPLE_STORE: i32 = 7;
    pub const RESULT: i32 = 8;
}

/// Lock mode codes, weakest to strongest.
pub mod lock_mode {
    pub const NO_LOCK: i32 = 0;
    pub const ACCESS_SHARE: i32 = 1;
    pub const ROW_SHARE: i32 = 2;
    pub const ROW_EXCLUSIVE: i32 = 3;
    pub const SHARE_UPDATE_EXCLUSIVE: i32 = 4;
    pub const SHARE: i32 = 5;
    pub const SHARE_ROW_EXCLUSIVE: i32 = 6;
    pub const EXCLUSIVE: i32 = 7;
    pub const ACCESS_EXCLUSIVE: i32 = 8;
}

/// Join type codes.
pub mod join_type {
    pub const INNER: i32 = 0;
    pub const LEFT: i32 = 1;
    pub const FULL: i32 = 2;
    pub const RIGHT: i32 = 3;
    pub const SEMI: i32 = 4;
    pub const ANTI: i32 = 5;
    pub const UNIQUE_OUTER: i32 = 6;
    pub const UNIQUE_INNER: i32 = 7;
}

/// Boolean operator codes.
pub mod bool_op {
    pub const AND: i32 = 0;
    pub const OR: i32 = 1;
    pub const NOT: i32 = 2;
}

/// Decode a relation storage kind code.
pub fn rel_kind_str(kind: char) -> &'static str {
    match kind {
        rel_kind::ORDINARY_TABLE => "Ordinary Table",
        rel_kind::INDEX => "Secondary Index",
        rel_kind::SEQUENCE => "Sequence Object",
        rel_kind::TOAST_TABLE => "Out of Line Values",
        rel_kind::VIEW => "View",
        rel_kind::MATERIALIZED_VIEW => "Materialized View",
        rel_kind::COMPOSITE_TYPE => "Composite Type",
        rel_kind::FOREIGN_TABLE => "Foreign Table",
        rel_kind::PARTITIONED_TABLE => "Partitioned Table",
        rel_kind::PARTITIONED_INDEX => "Partitioned Index",
        rel_kind::UNLOGGED_TABLE => "Unlogged Permanent Table",
        _ => "",
    }
}

/// Decode a range-table-entry kind code.
pub fn rte_kind_str(kind: i32) -> &'static str {
    match kind {
        rte_kind::RELATION => "Relation",
        rte_kind::SUBQUERY => "subquery",
        rte_kind::JOIN => "JOIN",
        rte_kind::FUNCTION => "Function",
        rte_kind::TABLE_FUNC => "table func",
        rte_kind::VALUES => "Value",
        rte_kind::CTE => "CTE",
        rte_kind::NAMED_TUPLE_STORE => "named tuple store",
        rte_kind::RESULT => "result",
        _ => "",
    }
}

/// Decode a lock mode code.
pub fn lock_mode_str(mode: i32) -> &'static str {
    match mode {
        lock_mode::NO_LOCK => "NoLock",
        lock_mode::ACCESS_SHARE => "AccessShareLock",
        lock_mode::ROW_SHARE => "RowShareLock",
        lock_mode::ROW_EXCLUSIVE => "RowExclusiveLock",
        lock_mode::SHARE_UPDATE_EXCLUSIVE => "ShareUpdateExclusiveLock",
        lock_mode::SHARE => "ShareLock",
        lock_mode::SHARE_ROW_EXCLUSIVE => "ShareRowExclusiveLock",
        lock_mode::EXCLUSIVE => "ExclusiveLock",
        lock_mode::ACCESS_EXCLUSIVE => "AccessExclusiveLock",
        _ => "",
    }
}

/// Decode a join type code.
pub fn join_type_str(kind: i32) -> &'static str {
    match kind {
        join_type::INNER => "JOIN_INNER",
        join_type::LEFT => "JOIN_LEFT",
        join_type::FULL => "JOIN_FULL",
        join_type::RIGHT => "JOIN_RIGHT",
        join_type::SEMI => "JOIN_SEMI",
        join_type::ANTI => "JOIN_ANTI",
        join_type::UNIQUE_OUTER => "JOIN_UNIQUE_OUTER",
        join_type::UNIQUE_INNER => "JOIN_UNIQUE_INNER",
        _ => "",
    }
}

/// Decode a boolean operator code.
pub fn bool_op_str(op: i32) -> &'static str {
    match op {
        bool_op::AND => "AND",
        bool_op::OR => "OR",
        bool_op::NOT => "NOT",
        _ => "",
    }
}
