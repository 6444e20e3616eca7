//! Filter selection tests
//!
//! Selection order, match locations, mappings, scalars and the identity
//! filter.

mod support;

use std::sync::Arc;

use jpfilter_core::{
    BoolExpr, ComparisonOp, Datum, Expression, Filter, FilterError, PathQuery, PathSegment,
};
use serde_json::{Value, json};

fn price_below(limit: i64) -> Filter {
    Filter::new(Expression::compare(
        PathQuery::field("price"),
        ComparisonOp::Less,
        json!(limit),
    ))
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn test_selects_in_input_order() {
        support::init_logging();
        let books = json!([
            {"title": "A", "price": 8},
            {"title": "B", "price": 22},
            {"title": "C", "price": 3},
            {"title": "D", "price": 9}
        ]);

        let selected = price_below(10)
            .select_values(&books)
            .expect("numeric prices are comparable");

        let titles: Vec<&Value> = selected.iter().map(|book| &book["title"]).collect();
        assert_eq!(titles, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_matches_carry_index_and_parent() {
        let root = Arc::new(Datum::wrap(json!({"store": {"book": []}})));
        let books = Datum::new(
            json!([{"price": 30}, {"price": 5}, {"price": 7}]),
            PathSegment::Member("book".to_string()),
            Some(Arc::new(Datum::new(
                json!({"book": []}),
                PathSegment::Member("store".to_string()),
                Some(root),
            ))),
        );

        let selected = price_below(10)
            .select(&books)
            .expect("numeric prices are comparable");

        let paths: Vec<String> = selected
            .iter()
            .map(|datum| datum.full_path().to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["$['store']['book'][1]", "$['store']['book'][2]"]
        );
        assert_eq!(selected[0].path(), &PathSegment::Index(1));
        assert_eq!(
            selected[0].context().map(Datum::value),
            Some(books.value())
        );
    }

    #[test]
    fn test_mapping_values_are_filtered_in_insertion_order() {
        let prices = json!({
            "zebra": {"price": 1},
            "apple": {"price": 50},
            "mango": {"price": 2}
        });

        let selected = price_below(10)
            .select(&Datum::wrap(&prices))
            .expect("numeric prices are comparable");

        let values: Vec<&Value> = selected.iter().map(Datum::value).collect();
        assert_eq!(values, vec![&json!({"price": 1}), &json!({"price": 2})]);
        // keys are discarded, matches are addressed by position
        assert_eq!(selected[1].path(), &PathSegment::Index(2));
    }

    #[test]
    fn test_scalars_select_nothing() {
        let filter = price_below(10);
        for scalar in [json!(5), json!("text"), json!(true), Value::Null] {
            let selected = filter
                .select_values(&scalar)
                .expect("scalars never fail");
            assert!(selected.is_empty(), "{scalar} should have no children");
        }
    }

    #[test]
    fn test_identity_filter_returns_input() {
        let data = json!([1, 2, {"a": 3}]);
        let datum = Datum::wrap(&data);

        let selected = Filter::identity()
            .select(&datum)
            .expect("identity never fails");
        assert_eq!(selected, vec![datum]);
        assert_eq!(Filter::identity().to_string(), "[?]");
    }

    #[test]
    fn test_selection_is_idempotent() {
        let filter = Filter::new(Expression::exists(PathQuery::field("a")));
        let data = json!([{"a": 1}, {"b": 2}, {"a": null}, 4]);

        let once = filter.select_values(&data).expect("existence never fails");
        let twice = filter
            .select_values(&Value::Array(once.clone()))
            .expect("existence never fails");
        assert_eq!(once, twice);
        assert_eq!(once, vec![json!({"a": 1}), json!({"a": null})]);
    }

    #[test]
    fn test_existence_selects_elements_with_member() {
        let data = json!([{"a": 1}, {"b": 1}, {"a": {"x": 0}}, [1], "a"]);
        let filter = Filter::new(Expression::exists(PathQuery::field("a")));

        let selected = filter.select(&Datum::wrap(&data)).expect("existence never fails");
        let indices: Vec<&PathSegment> = selected.iter().map(Datum::path).collect();
        assert_eq!(indices, vec![&PathSegment::Index(0), &PathSegment::Index(2)]);
    }

    #[test]
    fn test_negated_filter_partitions_input() {
        let data = json!([{"a": 1}, {"a": 0}, {"b": 5}, {"a": 3}]);
        let positive = Expression::compare(PathQuery::field("a"), ComparisonOp::Greater, json!(0));

        let kept = Filter::new(positive.clone())
            .select_values(&data)
            .expect("integers are comparable");
        let rest = Filter::new(BoolExpr::negation(positive))
            .select_values(&data)
            .expect("integers are comparable");

        assert_eq!(kept.len() + rest.len(), 4);
        assert!(kept.iter().all(|item| !rest.contains(item)));
        assert_eq!(rest, vec![json!({"a": 0}), json!({"b": 5})]);
    }
}

#[cfg(test)]
mod comparand_tests {
    use super::*;

    #[test]
    fn test_coerced_candidates_match_and_others_are_skipped() {
        let data = json!(["5", "x", 5, 5.9, true, null]);
        let filter = Filter::new(Expression::compare(
            PathQuery::current(),
            ComparisonOp::Equal,
            json!(5),
        ));

        let selected = filter.select(&Datum::wrap(&data)).expect("equality never fails");
        let indices: Vec<&PathSegment> = selected.iter().map(Datum::path).collect();
        assert_eq!(
            indices,
            vec![
                &PathSegment::Index(0),
                &PathSegment::Index(2),
                &PathSegment::Index(3)
            ]
        );
    }

    #[test]
    fn test_boolean_comparand_coerces_candidates() {
        let data = json!([{"on": true}, {"on": "TRUE"}, {"on": 1}, {"on": 0}, {"on": "yes"}]);
        let filter = Filter::new(Expression::compare(
            PathQuery::field("on"),
            ComparisonOp::Equal,
            json!(true),
        ));

        let selected = filter.select_values(&data).expect("equality never fails");
        assert_eq!(
            selected,
            vec![json!({"on": true}), json!({"on": "TRUE"}), json!({"on": 1})]
        );
    }

    #[test]
    fn test_false_strings_compare_as_false() {
        let data = json!([{"on": "false"}, {"on": ""}, {"on": "no"}, {"on": false}]);
        let filter = Filter::new(Expression::compare(
            PathQuery::field("on"),
            ComparisonOp::Equal,
            json!(false),
        ));

        let selected = filter.select(&Datum::wrap(&data)).expect("equality never fails");
        let indices: Vec<&PathSegment> = selected.iter().map(Datum::path).collect();
        assert_eq!(indices, vec![&PathSegment::Index(0), &PathSegment::Index(3)]);
    }

    #[test]
    fn test_root_relative_comparand() {
        let doc = json!({"limit": 10, "items": [{"n": 4}, {"n": 12}, {"n": 10}]});
        let items = Datum::new(
            doc["items"].clone(),
            PathSegment::Member("items".to_string()),
            Some(Arc::new(Datum::wrap(&doc))),
        );
        let filter = Filter::new(Expression::compare(
            PathQuery::field("n"),
            ComparisonOp::LessEq,
            jpfilter_core::Comparand::query(PathQuery::root().member("limit")),
        ));

        let selected = filter.select(&items).expect("integers are comparable");
        let values: Vec<&Value> = selected.iter().map(Datum::value).collect();
        assert_eq!(values, vec![&json!({"n": 4}), &json!({"n": 10})]);
        assert_eq!(filter.to_string(), "[?n <= $.limit]");
    }

    #[test]
    fn test_missing_query_comparand_matches_nothing() {
        let data = json!([{"n": 1}, {"n": 2}]);
        let filter = Filter::new(Expression::compare(
            PathQuery::field("n"),
            ComparisonOp::Less,
            jpfilter_core::Comparand::query(PathQuery::root().member("absent")),
        ));

        let selected = filter.select_values(&data).expect("nothing is compared");
        assert!(selected.is_empty());
    }

    #[test]
    fn test_regex_search_is_unanchored() {
        let data = json!(["foobar", "bar", "FOO", 100]);
        let filter = Filter::new(Expression::compare(
            PathQuery::current(),
            ComparisonOp::Matches,
            json!("o+"),
        ));

        let selected = filter.select_values(&data).expect("pattern is valid");
        assert_eq!(selected, vec![json!("foobar")]);
    }

    #[test]
    fn test_regex_matches_string_form_of_numbers() {
        let data = json!([100, 25, "10"]);
        let filter = Filter::new(Expression::compare(
            PathQuery::current(),
            ComparisonOp::Matches,
            json!("^1"),
        ));

        let selected = filter.select_values(&data).expect("pattern is valid");
        assert_eq!(selected, vec![json!(100), json!("10")]);
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_incomparable_operands_fail_selection() {
        let data = json!([{"price": 1}, {"price": {"amount": 2}}]);
        let filter = Filter::new(Expression::compare(
            PathQuery::field("price"),
            ComparisonOp::Less,
            json!("ten"),
        ));

        let err = filter
            .select_values(&data)
            .expect_err("a number and a string have no ordering");
        assert!(matches!(
            err,
            FilterError::Incomparable {
                op: ComparisonOp::Less,
                ..
            }
        ));
        assert!(err.is_evaluation_error());
    }

    #[test]
    fn test_invalid_regex_fails_selection() {
        let filter = Filter::new(Expression::compare(
            PathQuery::current(),
            ComparisonOp::Matches,
            json!("(unclosed"),
        ));

        let err = filter
            .select_values(&json!(["a"]))
            .expect_err("pattern does not compile");
        assert!(matches!(err, FilterError::InvalidRegex { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_unknown_operator_is_rejected_at_construction() {
        let err = Expression::with_symbol(PathQuery::field("a"), "<>", json!(1))
            .expect_err("'<>' is not an operator");
        assert_eq!(
            err,
            FilterError::UnknownOperator {
                symbol: "<>".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown operator '<>'");
    }
}
