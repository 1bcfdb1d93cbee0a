//! Recursive serialization of query trees into document values.
//!
//! [`Dumper`] walks a borrowed tree exactly once and produces an
//! independent [`Value`] that aliases nothing in the input. Dispatch over
//! the node kinds is an exhaustive `match`, so a kind added to the model is
//! a compile-time gap here rather than a silent fallthrough.

use querytree_model::codes::{
    bool_op_str, join_type_str, lock_mode_str, rel_kind_str, rte_kind, rte_kind_str,
};
use querytree_model::{
    Alias, BoolExpr, Const, FromExpr, JoinExpr, Node, OpExpr, Query, RangeTblEntry, RangeTblRef,
    SortGroupClause, StrVal, TargetEntry, Var, WindowClause, WindowFunc,
};

use crate::error::DumpError;
use crate::namelist::join_names;
use crate::value::{ObjectBuilder, Value};

/// Traversal limits for one dump call.
#[derive(Clone, Copy, Debug)]
pub struct DumpLimits {
    /// Maximum nesting depth, counted on every descent (default: 1024).
    pub(crate) max_depth: u32,
    /// Byte capacity of compact column-name summaries (default: 64).
    pub(crate) namelist_capacity: usize,
}

impl Default for DumpLimits {
    fn default() -> Self {
        Self {
            max_depth: 1024,
            namelist_capacity: 64,
        }
    }
}

impl DumpLimits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the capacity of compact column-name summaries.
    pub fn namelist_capacity(mut self, capacity: usize) -> Self {
        self.namelist_capacity = capacity;
        self
    }
}

/// Serializes query trees into ordered document values.
pub struct Dumper {
    limits: DumpLimits,
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new()
    }
}

impl Dumper {
    pub fn new() -> Self {
        Self {
            limits: DumpLimits::default(),
        }
    }

    pub fn with_limits(limits: DumpLimits) -> Self {
        Self { limits }
    }

    /// Serialize one query level.
    ///
    /// An absent query is not an error; it serializes to an empty object.
    pub fn query(&self, query: Option<&Query>) -> Result<Value, DumpError> {
        match query {
            None => Ok(Value::Object(Vec::new())),
            Some(query) => self.query_at(query, 0),
        }
    }

    /// Serialize a single node; an absent node serializes to null.
    pub fn node(&self, node: Option<&Node>) -> Result<Value, DumpError> {
        self.node_at(node, 0)
    }

    fn descend(&self, depth: u32) -> Result<u32, DumpError> {
        if depth >= self.limits.max_depth {
            Err(DumpError::DepthExceeded {
                limit: self.limits.max_depth,
            })
        } else {
            Ok(depth + 1)
        }
    }

    fn node_at(&self, node: Option<&Node>, depth: u32) -> Result<Value, DumpError> {
        let Some(node) = node else {
            return Ok(Value::Null);
        };
        let depth = self.descend(depth)?;
        match node {
            Node::Alias(n) => Ok(self.alias(n)),
            Node::Str(n) => Ok(str_val(n)),
            Node::RangeTblEntry(n) => self.range_tbl_entry(n, depth),
            Node::FromExpr(n) => self.from_expr(n, depth),
            Node::RangeTblRef(n) => Ok(range_tbl_ref(n)),
            Node::JoinExpr(n) => self.join_expr(n, depth),
            Node::BoolExpr(n) => self.bool_expr(n, depth),
            Node::OpExpr(n) => self.op_expr(n, depth),
            Node::Var(n) => Ok(var(n)),
            Node::Const(n) => Ok(const_val(n)),
            Node::TargetEntry(n) => self.target_entry(n, depth),
            Node::SortGroupClause(n) => Ok(sort_group_clause(n)),
            Node::WindowFunc(n) => self.window_func(n, depth),
            Node::WindowClause(n) => self.window_clause(n, depth),
            Node::Unrecognized(tag) => Ok(unrecognized(*tag)),
        }
    }

    /// Map an ordered node list element-wise, preserving order and length.
    fn list_at(&self, nodes: &[Node], depth: u32) -> Result<Value, DumpError> {
        let mut items = Vec::with_capacity(nodes.len());
        for node in nodes {
            items.push(self.node_at(Some(node), depth)?);
        }
        Ok(Value::Array(items))
    }

    fn query_at(&self, query: &Query, depth: u32) -> Result<Value, DumpError> {
        let depth = self.descend(depth)?;

        let mut rtable = Vec::with_capacity(query.rtable.len());
        for rte in &query.rtable {
            let child = self.descend(depth)?;
            rtable.push(self.range_tbl_entry(rte, child)?);
        }

        let jointree = match &query.jointree {
            Some(jointree) => self.from_expr(jointree, self.descend(depth)?)?,
            None => Value::Null,
        };

        Ok(ObjectBuilder::new()
            .field("node", "Query")
            .field("query_id", query.query_id as i64)
            .field("can_set_tag", query.can_set_tag)
            .field("has_aggs", query.has_aggs)
            .field("has_window_funcs", query.has_window_funcs)
            .field("has_target_srfs", query.has_target_srfs)
            .field("has_sublinks", query.has_sublinks)
            .field("has_distinct_on", query.has_distinct_on)
            .field("has_for_update", query.has_for_update)
            .field("has_row_security", query.has_row_security)
            .field("rtable", rtable)
            .field("jointree", jointree)
            .field("merge_action_list", self.list_at(&query.merge_action_list, depth)?)
            .field("target_list", self.list_at(&query.target_list, depth)?)
            .field("returning_list", self.list_at(&query.returning_list, depth)?)
            .field("group_clause", self.list_at(&query.group_clause, depth)?)
            .field("group_distinct", query.group_distinct)
            .field("grouping_sets", self.list_at(&query.grouping_sets, depth)?)
            .field("having_qual", self.node_at(query.having_qual.as_deref(), depth)?)
            .field("window_clause", self.list_at(&query.window_clause, depth)?)
            .field("distinct_clause", self.list_at(&query.distinct_clause, depth)?)
            .field("sort_clause", self.list_at(&query.sort_clause, depth)?)
            .field("limit_offset", self.node_at(query.limit_offset.as_deref(), depth)?)
            .field("limit_count", self.node_at(query.limit_count.as_deref(), depth)?)
            .field("row_marks", self.list_at(&query.row_marks, depth)?)
            .field("set_operations", self.node_at(query.set_operations.as_deref(), depth)?)
            .build())
    }

    fn alias(&self, alias: &Alias) -> Value {
        let summary = join_names(
            alias.colnames.iter().map(String::as_str),
            self.limits.namelist_capacity,
        );
        let colnames: Vec<Value> = alias
            .colnames
            .iter()
            .map(|name| Value::from(name.as_str()))
            .collect();

        let mut obj = ObjectBuilder::new()
            .field("node", "Alias")
            .field("aliasname", alias.aliasname.as_str())
            .field("colnames", colnames)
            .field("colnames_compact", summary.text);
        if summary.truncated {
            obj = obj.field("colnames_clipped", true);
        }
        obj.build()
    }

    fn opt_alias(&self, alias: Option<&Alias>) -> Value {
        alias.map_or(Value::Null, |alias| self.alias(alias))
    }

    fn range_tbl_entry(&self, rte: &RangeTblEntry, depth: u32) -> Result<Value, DumpError> {
        let mut obj = ObjectBuilder::new()
            .field("node", "RangeTblEntry")
            .field("alias", self.opt_alias(rte.alias.as_ref()))
            .field("eref", self.opt_alias(rte.eref.as_ref()))
            .field("relid", rte.relid)
            .field("relkind", rte.relkind)
            .field("relkind_str", rel_kind_str(rte.relkind))
            .field("rtekind", rte.rtekind)
            .field("rtekind_str", rte_kind_str(rte.rtekind))
            .field("in_from_clause", rte.in_from_clause)
            .field("jointype", rte.jointype)
            .field("jointype_str", join_type_str(rte.jointype))
            .field("joinmergedcols", rte.joinmergedcols)
            .field("lateral", rte.lateral)
            .field("inh", rte.inh)
            .field("enrname", opt_str(rte.enrname.as_deref()))
            .field("rellockmode", rte.rellockmode)
            .field("rellockmode_str", lock_mode_str(rte.rellockmode))
            .field("security_barrier", rte.security_barrier);

        // The one recursion point back into the query serializer.
        if rte.rtekind == rte_kind::SUBQUERY {
            let subquery = match &rte.subquery {
                Some(subquery) => self.query_at(subquery, depth)?,
                None => Value::Null,
            };
            obj = obj.field("subquery", subquery);
        }
        Ok(obj.build())
    }

    fn from_expr(&self, from: &FromExpr, depth: u32) -> Result<Value, DumpError> {
        Ok(ObjectBuilder::new()
            .field("node", "FromExpr")
            .field("fromlist", self.list_at(&from.fromlist, depth)?)
            .field("quals", self.node_at(from.quals.as_deref(), depth)?)
            .build())
    }

    fn join_expr(&self, join: &JoinExpr, depth: u32) -> Result<Value, DumpError> {
        let using_clause: Vec<Value> = join
            .using_clause
            .iter()
            .map(|name| Value::from(name.as_str()))
            .collect();

        Ok(ObjectBuilder::new()
            .field("node", "JoinExpr")
            .field("jointype", join.jointype)
            .field("jointype_str", join_type_str(join.jointype))
            .field("is_natural", join.is_natural)
            .field("larg", self.node_at(join.larg.as_deref(), depth)?)
            .field("rarg", self.node_at(join.rarg.as_deref(), depth)?)
            .field("using_clause", using_clause)
            .field("join_using_alias", self.opt_alias(join.join_using_alias.as_ref()))
            .field("quals", self.node_at(join.quals.as_deref(), depth)?)
            .field("alias", self.opt_alias(join.alias.as_ref()))
            .field("rtindex", join.rtindex)
            .build())
    }

    fn bool_expr(&self, expr: &BoolExpr, depth: u32) -> Result<Value, DumpError> {
        Ok(ObjectBuilder::new()
            .field("node", "BoolExpr")
            .field("boolop", expr.boolop)
            .field("boolop_str", bool_op_str(expr.boolop))
            .field("args", self.list_at(&expr.args, depth)?)
            .field("location", expr.location)
            .build())
    }

    fn op_expr(&self, expr: &OpExpr, depth: u32) -> Result<Value, DumpError> {
        Ok(ObjectBuilder::new()
            .field("node", "OpExpr")
            .field("opno", expr.opno)
            .field("opfuncid", expr.opfuncid)
            .field("opresulttype", expr.opresulttype)
            .field("opretset", expr.opretset)
            .field("opcollid", expr.opcollid)
            .field("inputcollid", expr.inputcollid)
            .field("args", self.list_at(&expr.args, depth)?)
            .field("location", expr.location)
            .build())
    }

    fn target_entry(&self, entry: &TargetEntry, depth: u32) -> Result<Value, DumpError> {
        Ok(ObjectBuilder::new()
            .field("node", "TargetEntry")
            .field("expr", self.node_at(entry.expr.as_deref(), depth)?)
            .field("resno", entry.resno)
            .field("resname", opt_str(entry.resname.as_deref()))
            .field("ressortgroupref", entry.ressortgroupref)
            .field("resorigtbl", entry.resorigtbl)
            .field("resorigcol", entry.resorigcol)
            .field("resjunk", entry.resjunk)
            .build())
    }

    fn window_func(&self, func: &WindowFunc, depth: u32) -> Result<Value, DumpError> {
        Ok(ObjectBuilder::new()
            .field("node", "WindowFunc")
            .field("winfnoid", func.winfnoid)
            .field("wintype", func.wintype)
            .field("wincollid", func.wincollid)
            .field("inputcollid", func.inputcollid)
            .field("args", self.list_at(&func.args, depth)?)
            .field("aggfilter", self.node_at(func.aggfilter.as_deref(), depth)?)
            .field("winref", func.winref)
            .field("winstar", func.winstar)
            .field("winagg", func.winagg)
            .field("location", func.location)
            .build())
    }

    fn window_clause(&self, clause: &WindowClause, depth: u32) -> Result<Value, DumpError> {
        Ok(ObjectBuilder::new()
            .field("node", "WindowClause")
            .field("name", opt_str(clause.name.as_deref()))
            .field("refname", opt_str(clause.refname.as_deref()))
            .field("partition_clause", self.list_at(&clause.partition_clause, depth)?)
            .field("order_clause", self.list_at(&clause.order_clause, depth)?)
            .field("frame_options", clause.frame_options)
            .field("start_offset", self.node_at(clause.start_offset.as_deref(), depth)?)
            .field("end_offset", self.node_at(clause.end_offset.as_deref(), depth)?)
            .field("run_condition", self.list_at(&clause.run_condition, depth)?)
            .field("start_in_range_func", clause.start_in_range_func)
            .field("end_in_range_func", clause.end_in_range_func)
            .field("in_range_coll", clause.in_range_coll)
            .field("in_range_asc", clause.in_range_asc)
            .field("in_range_nulls_first", clause.in_range_nulls_first)
            .field("winref", clause.winref)
            .field("copied_order", clause.copied_order)
            .build())
    }
}

fn str_val(value: &StrVal) -> Value {
    ObjectBuilder::new()
        .field("node", "String")
        .field("sval", value.sval.as_str())
        .build()
}

fn range_tbl_ref(rtr: &RangeTblRef) -> Value {
    ObjectBuilder::new()
        .field("node", "RangeTblRef")
        .field("rtindex", rtr.rtindex)
        .build()
}

fn var(var: &Var) -> Value {
    ObjectBuilder::new()
        .field("node", "Var")
        .field("varno", var.varno)
        .field("varattno", var.varattno)
        .field("vartype", var.vartype)
        .field("vartypmod", var.vartypmod)
        .field("varcollid", var.varcollid)
        .field("varlevelsup", var.varlevelsup)
        .field("varattnosyn", var.varattnosyn)
        .field("location", var.location)
        .build()
}

fn const_val(c: &Const) -> Value {
    ObjectBuilder::new()
        .field("node", "Const")
        .field("consttype", c.consttype)
        .field("consttypmod", c.consttypmod)
        .field("constcollid", c.constcollid)
        .field("constlen", c.constlen)
        .field("constisnull", c.constisnull)
        .field("constbyval", c.constbyval)
        .field("location", c.location)
        .build()
}

fn sort_group_clause(clause: &SortGroupClause) -> Value {
    ObjectBuilder::new()
        .field("node", "SortGroupClause")
        .field("tle_sortgroupref", clause.tle_sortgroupref)
        .field("eqop", clause.eqop)
        .field("sortop", clause.sortop)
        .field("nulls_first", clause.nulls_first)
        .field("hashable", clause.hashable)
        .build()
}

fn unrecognized(tag: u32) -> Value {
    ObjectBuilder::new()
        .field("node", "Unrecognized")
        .field("tag", tag)
        .build()
}

fn opt_str(value: Option<&str>) -> Value {
    value.map_or(Value::Null, Value::from)
}
