use querytree_model::codes::{bool_op, join_type, lock_mode, rte_kind};
use querytree_model::{
    Alias, BoolExpr, Const, FromExpr, JoinExpr, Node, OpExpr, Query, RangeTblEntry, RangeTblRef,
    SortGroupClause, StrVal, TargetEntry, Var, WindowClause, WindowFunc,
};
use serde_json::json;

use crate::dump::{DumpLimits, Dumper};
use crate::error::DumpError;
use crate::value::Value;

fn to_json(value: &Value) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}

fn relation_rte(relid: u32) -> RangeTblEntry {
    RangeTblEntry {
        relid,
        relkind: 'r',
        rtekind: rte_kind::RELATION,
        in_from_clause: true,
        rellockmode: lock_mode::ACCESS_SHARE,
        ..Default::default()
    }
}

fn subquery_rte(inner: Query) -> RangeTblEntry {
    RangeTblEntry {
        rtekind: rte_kind::SUBQUERY,
        in_from_clause: true,
        subquery: Some(Box::new(inner)),
        ..Default::default()
    }
}

/// NOT(NOT(...(var)...)), `levels` deep.
fn nested_not(levels: usize) -> Node {
    let mut node = Node::Var(Var::default());
    for _ in 0..levels {
        node = Node::BoolExpr(BoolExpr {
            boolop: bool_op::NOT,
            args: vec![node],
            location: -1,
        });
    }
    node
}

/// A query wrapping a sub-query, `levels` deep.
fn nested_subquery(levels: usize) -> Query {
    let mut query = Query::default();
    for _ in 0..levels {
        query = Query {
            rtable: vec![subquery_rte(query)],
            ..Default::default()
        };
    }
    query
}

#[test]
fn absent_node_is_null() {
    let doc = Dumper::new().node(None).unwrap();
    assert_eq!(doc, Value::Null);
}

#[test]
fn absent_query_is_empty_object() {
    let doc = Dumper::new().query(None).unwrap();
    assert_eq!(doc, Value::Object(Vec::new()));
}

#[test]
fn every_kind_carries_its_discriminant() {
    let cases: Vec<(Node, &str)> = vec![
        (Node::Alias(Alias::default()), "Alias"),
        (Node::Str(StrVal::default()), "String"),
        (Node::RangeTblEntry(RangeTblEntry::default()), "RangeTblEntry"),
        (Node::FromExpr(FromExpr::default()), "FromExpr"),
        (Node::RangeTblRef(RangeTblRef::default()), "RangeTblRef"),
        (Node::JoinExpr(JoinExpr::default()), "JoinExpr"),
        (Node::BoolExpr(BoolExpr::default()), "BoolExpr"),
        (Node::OpExpr(OpExpr::default()), "OpExpr"),
        (Node::Var(Var::default()), "Var"),
        (Node::Const(Const::default()), "Const"),
        (Node::TargetEntry(TargetEntry::default()), "TargetEntry"),
        (Node::SortGroupClause(SortGroupClause::default()), "SortGroupClause"),
        (Node::WindowFunc(WindowFunc::default()), "WindowFunc"),
        (Node::WindowClause(WindowClause::default()), "WindowClause"),
        (Node::Unrecognized(42), "Unrecognized"),
    ];

    let dumper = Dumper::new();
    for (node, expected) in cases {
        let doc = to_json(&dumper.node(Some(&node)).unwrap());
        assert_eq!(doc["node"], json!(expected), "kind {expected}");
    }
}

#[test]
fn discriminant_is_the_first_field() {
    let doc = Dumper::new()
        .node(Some(&Node::Var(Var::default())))
        .unwrap();
    let Value::Object(fields) = doc else {
        panic!("expected object");
    };
    assert_eq!(fields[0].0, "node");
}

#[test]
fn unrecognized_keeps_raw_tag() {
    let doc = to_json(&Dumper::new().node(Some(&Node::Unrecognized(77))).unwrap());
    assert_eq!(doc, json!({"node": "Unrecognized", "tag": 77}));
}

#[test]
fn var_document_is_exact() {
    let node = Node::Var(Var {
        varno: 1,
        varattno: 2,
        vartype: 23,
        vartypmod: -1,
        varcollid: 0,
        varlevelsup: 0,
        varattnosyn: 2,
        location: 14,
    });
    let doc = to_json(&Dumper::new().node(Some(&node)).unwrap());
    assert_eq!(
        doc,
        json!({
            "node": "Var",
            "varno": 1,
            "varattno": 2,
            "vartype": 23,
            "vartypmod": -1,
            "varcollid": 0,
            "varlevelsup": 0,
            "varattnosyn": 2,
            "location": 14,
        })
    );
}

#[test]
fn rtable_preserves_length_and_order() {
    let query = Query {
        rtable: vec![relation_rte(10), relation_rte(20), relation_rte(30)],
        ..Default::default()
    };
    let doc = to_json(&Dumper::new().query(Some(&query)).unwrap());

    let rtable = doc["rtable"].as_array().unwrap();
    assert_eq!(rtable.len(), 3);
    let relids: Vec<i64> = rtable
        .iter()
        .map(|entry| entry["relid"].as_i64().unwrap())
        .collect();
    assert_eq!(relids, [10, 20, 30]);
}

#[test]
fn decoded_companions_accompany_raw_codes() {
    let rte = RangeTblEntry {
        relid: 16384,
        relkind: 'v',
        rtekind: rte_kind::RELATION,
        rellockmode: lock_mode::ACCESS_SHARE,
        jointype: join_type::LEFT,
        ..Default::default()
    };
    let doc = to_json(&Dumper::new().node(Some(&Node::RangeTblEntry(rte))).unwrap());

    assert_eq!(doc["relkind"], json!("v"));
    assert_eq!(doc["relkind_str"], json!("View"));
    assert_eq!(doc["rtekind_str"], json!("Relation"));
    assert_eq!(doc["rellockmode_str"], json!("AccessShareLock"));
    assert_eq!(doc["jointype_str"], json!("JOIN_LEFT"));
}

#[test]
fn non_subquery_entry_has_no_subquery_key() {
    let doc = to_json(&Dumper::new().node(Some(&Node::RangeTblEntry(relation_rte(1)))).unwrap());
    assert!(doc.get("subquery").is_none());
}

#[test]
fn subquery_kind_without_nested_query_is_null() {
    let rte = RangeTblEntry {
        rtekind: rte_kind::SUBQUERY,
        ..Default::default()
    };
    let doc = to_json(&Dumper::new().node(Some(&Node::RangeTblEntry(rte))).unwrap());
    assert_eq!(doc["subquery"], json!(null));
}

#[test]
fn subquery_embeds_nested_query() {
    let inner = Query {
        rtable: vec![relation_rte(100), relation_rte(200)],
        jointree: Some(FromExpr {
            fromlist: vec![Node::JoinExpr(JoinExpr {
                jointype: join_type::INNER,
                larg: Some(Box::new(Node::RangeTblRef(RangeTblRef { rtindex: 1 }))),
                rarg: Some(Box::new(Node::RangeTblRef(RangeTblRef { rtindex: 2 }))),
                using_clause: vec!["id".into()],
                rtindex: 3,
                ..Default::default()
            })],
            quals: None,
        }),
        ..Default::default()
    };
    let outer = Query {
        rtable: vec![subquery_rte(inner)],
        ..Default::default()
    };

    let doc = to_json(&Dumper::new().query(Some(&outer)).unwrap());
    let nested = &doc["rtable"][0]["subquery"];

    assert_eq!(nested["rtable"].as_array().unwrap().len(), 2);
    let join = &nested["jointree"]["fromlist"][0];
    assert_eq!(join["node"], json!("JoinExpr"));
    assert_eq!(join["larg"]["rtindex"], json!(1));
    assert_eq!(join["rarg"]["rtindex"], json!(2));
    assert_eq!(join["using_clause"], json!(["id"]));
}

#[test]
fn absent_jointree_is_explicit_null() {
    let doc = to_json(&Dumper::new().query(Some(&Query::default())).unwrap());
    assert_eq!(doc["jointree"], json!(null));
    assert_eq!(doc["having_qual"], json!(null));
    assert_eq!(doc["limit_count"], json!(null));
}

#[test]
fn clause_lists_go_through_the_list_encoder() {
    let query = Query {
        target_list: vec![
            Node::TargetEntry(TargetEntry {
                resno: 1,
                resname: Some("id".into()),
                ..Default::default()
            }),
            Node::TargetEntry(TargetEntry {
                resno: 2,
                resjunk: true,
                ..Default::default()
            }),
        ],
        sort_clause: vec![Node::SortGroupClause(SortGroupClause {
            tle_sortgroupref: 1,
            ..Default::default()
        })],
        row_marks: vec![Node::Unrecognized(9000)],
        ..Default::default()
    };
    let doc = to_json(&Dumper::new().query(Some(&query)).unwrap());

    let target_list = doc["target_list"].as_array().unwrap();
    assert_eq!(target_list.len(), 2);
    assert_eq!(target_list[0]["resname"], json!("id"));
    assert_eq!(target_list[1]["resname"], json!(null));
    assert_eq!(target_list[1]["resjunk"], json!(true));

    assert_eq!(doc["sort_clause"][0]["node"], json!("SortGroupClause"));
    // Kinds outside the supported set flow through the fallback encoder.
    assert_eq!(doc["row_marks"][0], json!({"node": "Unrecognized", "tag": 9000}));
}

#[test]
fn alias_summary_reports_truncation() {
    let dumper = Dumper::with_limits(DumpLimits::new().namelist_capacity(8));
    let alias = Alias {
        aliasname: "t".into(),
        colnames: vec!["alpha".into(), "beta".into(), "gamma".into()],
    };
    let doc = to_json(&dumper.node(Some(&Node::Alias(alias))).unwrap());

    assert_eq!(doc["colnames"].as_array().unwrap().len(), 3);
    assert_eq!(doc["colnames_compact"], json!("alpha"));
    assert_eq!(doc["colnames_clipped"], json!(true));
}

#[test]
fn alias_summary_that_fits_has_no_clipped_flag() {
    let alias = Alias {
        aliasname: "t".into(),
        colnames: vec!["a".into(), "b".into()],
    };
    let doc = to_json(&Dumper::new().node(Some(&Node::Alias(alias))).unwrap());

    assert_eq!(doc["colnames_compact"], json!("a, b"));
    assert!(doc.get("colnames_clipped").is_none());
}

#[test]
fn expression_nesting_beyond_the_limit_is_reported() {
    let dumper = Dumper::with_limits(DumpLimits::new().max_depth(4));
    let err = dumper.node(Some(&nested_not(10))).unwrap_err();
    assert!(matches!(err, DumpError::DepthExceeded { limit: 4 }));
}

#[test]
fn subquery_nesting_beyond_the_limit_is_reported() {
    let dumper = Dumper::with_limits(DumpLimits::new().max_depth(8));
    let err = dumper.query(Some(&nested_subquery(16))).unwrap_err();
    assert!(matches!(err, DumpError::DepthExceeded { limit: 8 }));
}

#[test]
fn nesting_within_the_limit_succeeds() {
    let dumper = Dumper::with_limits(DumpLimits::new().max_depth(64));
    assert!(dumper.node(Some(&nested_not(8))).is_ok());
    assert!(dumper.query(Some(&nested_subquery(4))).is_ok());
}

#[test]
fn operator_expressions_recurse_into_arguments() {
    let node = Node::OpExpr(OpExpr {
        opno: 96,
        opfuncid: 65,
        opresulttype: 16,
        args: vec![
            Node::Var(Var {
                varno: 1,
                varattno: 1,
                ..Default::default()
            }),
            Node::Const(Const {
                consttype: 23,
                constlen: 4,
                constbyval: true,
                ..Default::default()
            }),
        ],
        location: 22,
        ..Default::default()
    });
    let doc = to_json(&Dumper::new().node(Some(&node)).unwrap());

    assert_eq!(doc["args"].as_array().unwrap().len(), 2);
    assert_eq!(doc["args"][0]["node"], json!("Var"));
    assert_eq!(doc["args"][1]["node"], json!("Const"));
    assert_eq!(doc["args"][1]["constbyval"], json!(true));
}

#[test]
fn window_clause_children_are_encoded() {
    let node = Node::WindowClause(WindowClause {
        name: Some("w".into()),
        partition_clause: vec![Node::SortGroupClause(SortGroupClause::default())],
        order_clause: vec![Node::SortGroupClause(SortGroupClause::default())],
        start_offset: Some(Box::new(Node::Const(Const::default()))),
        winref: 1,
        ..Default::default()
    });
    let doc = to_json(&Dumper::new().node(Some(&node)).unwrap());

    assert_eq!(doc["name"], json!("w"));
    assert_eq!(doc["refname"], json!(null));
    assert_eq!(doc["partition_clause"].as_array().unwrap().len(), 1);
    assert_eq!(doc["start_offset"]["node"], json!("Const"));
    assert_eq!(doc["end_offset"], json!(null));
}
