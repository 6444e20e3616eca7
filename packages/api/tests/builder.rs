//! Fluent predicate builder tests

use jpfilter::{
    BoolExpr, ComparisonOp, Expression, Filter, FilterError, PathQuery, at, current, not, root,
};
use serde_json::json;

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_builder_matches_hand_built_tree() {
        let built = at("a.b").ge(2).and(at("c").exists()).build();
        let manual = BoolExpr::conjunction(
            Expression::compare(PathQuery::fields(["a", "b"]), ComparisonOp::GreaterEq, json!(2)),
            Expression::exists(PathQuery::field("c")),
        );
        assert_eq!(built, manual);
    }

    #[test]
    fn test_operator_symbols() {
        let cases = [
            ("==", "[?n == 1]"),
            ("=", "[?n == 1]"),
            ("!=", "[?n != 1]"),
            ("<", "[?n < 1]"),
            ("<=", "[?n <= 1]"),
            (">", "[?n > 1]"),
            (">=", "[?n >= 1]"),
            ("=~", "[?n =~ 1]"),
        ];
        for (symbol, rendered) in cases {
            let filter = at("n").op(symbol, 1).expect("symbol is in the table").filter();
            assert_eq!(filter.to_string(), rendered, "symbol {symbol}");
        }

        let err = at("n").op("===", 1).expect_err("not an operator");
        assert!(matches!(err, FilterError::UnknownOperator { ref symbol } if symbol == "==="));
    }

    #[test]
    fn test_rendering_of_composed_filters() {
        let filter = not(at("deleted").exists())
            .and(at("tags").index(0).eq("new").or(current().member("score").gt(0.5)))
            .filter();
        assert_eq!(
            filter.to_string(),
            "[?(!deleted && (tags[0] == \"new\" || score > 0.5))]"
        );
    }

    #[test]
    fn test_not_operator_matches_not_fn() {
        assert_eq!(!at("a").exists(), not(at("a").exists()));
    }

    #[test]
    fn test_select_with_root_comparand() {
        env_logger::builder().is_test(true).try_init().ok();
        let doc = json!({
            "limit": 10,
            "items": [
                {"id": 1, "n": 3},
                {"id": 2, "n": "11"},
                {"id": 3, "n": "7"},
                {"id": 4}
            ]
        });

        let items = jpfilter::Datum::new(
            doc["items"].clone(),
            jpfilter::PathSegment::Member("items".to_string()),
            Some(std::sync::Arc::new(jpfilter::Datum::wrap(&doc))),
        );
        let selected = at("n").lt(root("limit")).filter().select(&items).expect("integers");
        let ids: Vec<_> = selected.iter().map(|item| item.value()["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(3)]);
    }

    #[test]
    fn test_update_through_builder_filter() {
        let mut data = json!([{"a": 1}, {"a": 0}, {"a": 0}]);
        let filter: Filter = at("a").eq(0).into();
        filter
            .update(&mut data, json!({"a": 5}))
            .expect("integers are comparable");
        assert_eq!(data, json!([{"a": 1}, {"a": 5}, {"a": 5}]));
    }

    #[test]
    fn test_matches_uses_pattern() {
        let filter = jpfilter::filter(at("name").matches("^J"));
        let people = json!([{"name": "Jane"}, {"name": "Bob"}, {"name": "Jo"}]);
        let selected = filter.select_values(&people).expect("pattern is valid");
        assert_eq!(selected, vec![json!({"name": "Jane"}), json!({"name": "Jo"})]);
    }
}
