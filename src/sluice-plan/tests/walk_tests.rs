//! Integration tests for the plan walker

use proptest::prelude::*;
use sluice_core::{Column, DataType, Schema};
use sluice_plan::*;

fn arb_expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        "[a-z]{1,6}".prop_map(col),
        any::<i64>().prop_map(lit),
    ];
    leaf.prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.and(r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.plus(r)),
            inner.clone().prop_map(Expression::is_null),
            (inner.clone(), "[a-z]{1,4}").prop_map(|(e, a)| e.alias(a)),
            prop::collection::vec(inner, 0..3).prop_map(|args| Expression::function("f", args)),
        ]
    })
}

fn count_nodes(expr: &Expression) -> usize {
    1 + expr.children().into_iter().map(count_nodes).sum::<usize>()
}

/// Counts enter and exit events, pruning below a fixed depth.
struct DepthLimited {
    depth: usize,
    max_depth: usize,
    enters: usize,
    exits: usize,
}

impl<'n> Visitor<'n, Expression> for DepthLimited {
    fn visit(&mut self, expr: Option<&'n Expression>) -> Option<&mut dyn Visitor<'n, Expression>> {
        match expr {
            Some(_) => {
                self.enters += 1;
                if self.depth >= self.max_depth {
                    return None;
                }
                self.depth += 1;
            }
            None => {
                self.exits += 1;
                self.depth -= 1;
            }
        }
        Some(self)
    }
}

proptest! {
    #[test]
    fn prop_inspect_visits_every_node_and_balances_exits(expr in arb_expression()) {
        let mut enters = 0;
        let mut exits = 0;
        inspect(&expr, |e| {
            match e {
                Some(_) => enters += 1,
                None => exits += 1,
            }
            true
        });

        prop_assert_eq!(enters, count_nodes(&expr));
        prop_assert_eq!(enters, exits);
    }

    #[test]
    fn prop_pruned_walk_balances_exits(expr in arb_expression(), max_depth in 0usize..4) {
        let mut visitor = DepthLimited { depth: 0, max_depth, enters: 0, exits: 0 };
        walk(&mut visitor, &expr);

        // Every continued node gets exactly one exit; pruned ones get none.
        prop_assert_eq!(visitor.depth, 0);
        prop_assert!(visitor.exits <= visitor.enters);
    }

    #[test]
    fn prop_pruning_root_children_keeps_later_siblings(
        left in arb_expression(),
        right in arb_expression(),
    ) {
        let expr = left.clone().and(right.clone());
        let mut seen = 0;
        inspect(&expr, |e| {
            match e {
                Some(e) if *e == left && seen == 1 => {
                    seen += 1;
                    false
                }
                Some(_) => {
                    seen += 1;
                    true
                }
                None => true,
            }
        });

        // Root, the pruned left subtree root, then all of the right subtree.
        prop_assert_eq!(seen, 2 + count_nodes(&right));
    }
}

fn orders() -> PlanNode {
    PlanNode::resolved_table(
        "orders",
        Schema::with_columns(vec![
            Column::new("id", DataType::Int64),
            Column::new("total", DataType::Float64),
        ]),
    )
}

fn items() -> PlanNode {
    PlanNode::resolved_table(
        "order_items",
        Schema::with_columns(vec![Column::new("order_id", DataType::Int64)]),
    )
}

#[test]
fn test_inspect_plan_prunes_subtree() {
    let plan = PlanNode::cross_join(
        PlanNode::subquery_alias("o", orders()),
        PlanNode::filter(items(), col("order_id").gt(lit(0i64))),
    );

    let mut names = Vec::new();
    inspect(&plan, |node| {
        let Some(node) = node else { return true };
        names.push(node.name());
        !matches!(node, PlanNode::SubqueryAlias(_))
    });

    assert_eq!(
        names,
        vec!["CrossJoin", "SubqueryAlias", "Filter", "ResolvedTable"]
    );
}

/// Records `(owner, expression)` pairs and counts exit sentinels.
#[derive(Default)]
struct OwnerRecorder {
    pairs: Vec<(String, String)>,
    exits: usize,
}

impl<'n> NodeVisitor<'n> for OwnerRecorder {
    fn visit(
        &mut self,
        node: Option<&'n PlanNode>,
        expr: Option<&'n Expression>,
    ) -> Option<&mut dyn NodeVisitor<'n>> {
        match (node, expr) {
            (Some(node), Some(expr)) => {
                self.pairs.push((node.name().to_string(), expr.to_string()));
                if matches!(expr, Expression::Function { .. }) {
                    return None;
                }
            }
            (None, None) => self.exits += 1,
            _ => panic!("node and expression must be both present or both absent"),
        }
        Some(self)
    }
}

#[test]
fn test_walk_with_node_passes_owner() {
    let plan = PlanNode::filter(orders(), col("total").gt(lit(10i64)));
    let PlanNode::Filter(filter) = &plan else {
        unreachable!()
    };

    let mut recorder = OwnerRecorder::default();
    walk_with_node(&mut recorder, &plan, &filter.predicate);

    assert_eq!(
        recorder.pairs,
        vec![
            ("Filter".to_string(), "(total > 10)".to_string()),
            ("Filter".to_string(), "total".to_string()),
            ("Filter".to_string(), "10".to_string()),
        ]
    );
    assert_eq!(recorder.exits, 3);
}

#[test]
fn test_walk_expressions_with_node_covers_whole_plan() {
    let plan = PlanNode::project(
        PlanNode::filter(orders(), col("id").eq(lit(7i64))),
        vec![
            Expression::function("upper", vec![col("note")]),
            col("total").alias("amount"),
        ],
    );

    let mut recorder = OwnerRecorder::default();
    walk_expressions_with_node(&mut recorder, &plan);

    let owners: Vec<&str> = recorder.pairs.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        owners,
        vec!["Project", "Project", "Project", "Filter", "Filter", "Filter"]
    );
    // The function call was pruned, so its argument never shows up.
    assert!(!recorder.pairs.iter().any(|(_, e)| e == "note"));
    assert_eq!(recorder.pairs.len() - 1, recorder.exits);
}

#[test]
fn test_plan_serialization() {
    let plan = PlanNode::truncate(Some("sales".to_string()), orders());
    let json = serde_json::to_string(&plan).unwrap();
    let restored: PlanNode = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, plan);
}
