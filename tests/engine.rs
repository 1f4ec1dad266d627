use opertree::{
    EvalError, Evaluator, check_tree,
    engine::{
        conversion::{
            array::ArrayConversion, boolean::BooleanConversion, core::Conversion,
            number::NumberConversion, string::StringConversion,
        },
        operator::{
            array::ArrayOperator,
            core::{Operator, OperatorFamily},
            generic::GenericOperator,
            number::NumberOperator,
            string::StringOperator,
        },
        result_type::table::{conversion_result_type, operator_result_type},
        tree::node::{Operand, OperationEntry, OperationNode, OperatorTable},
        value::{
            comparable::{comparable, tags_comparable},
            core::{Payload, Value},
            tag::{BaseType, Determinism, Tag},
        },
    },
    evaluate_pair, evaluate_tree, predicted_tag,
};

const ADD: u32 = 1;
const MINUS: u32 = 2;
const MULTIPLY: u32 = 3;
const DIVIDE: u32 = 4;

fn arithmetic_table() -> OperatorTable {
    [(ADD, NumberOperator::Add),
     (MINUS, NumberOperator::Minus),
     (MULTIPLY, NumberOperator::Multiply),
     (DIVIDE, NumberOperator::Divide)].into_iter()
                                      .map(|(id, op)| {
                                          (id,
                                           OperationEntry::new(NumberConversion::Identity,
                                                               NumberConversion::Identity,
                                                               op))
                                      })
                                      .collect()
}

fn num(n: f64) -> Value {
    Value::number(n)
}

fn node(id: u32, left: impl Into<Operand>, right: impl Into<Operand>) -> OperationNode {
    OperationNode::new(id, left, right)
}

/// Operands every operator accepts, with fixed determinism.
fn sample_operands(operator: Operator) -> (Value, Value) {
    match operator {
        Operator::Number(_) => (num(6.0), num(3.0)),
        Operator::String(_) => (Value::string("foo"), Value::string("bar")),
        Operator::Array(_) => (Value::array(vec![num(1.0), num(2.0)]), num(2.0)),
        Operator::Generic(_) => (Value::string("same"), Value::string("same")),
    }
}

/// One valid input per conversion, with fixed determinism.
fn sample_input(conversion: Conversion) -> Value {
    match conversion.source() {
        BaseType::Number => num(12.0),
        BaseType::String => Value::string("34"),
        BaseType::Boolean => Value::boolean(true),
        BaseType::Array => Value::array(vec![num(1.0), Value::string("x")]),
    }
}

fn all_conversions() -> Vec<Conversion> {
    NumberConversion::ALL.iter()
                         .map(|&c| Conversion::from(c))
                         .chain(StringConversion::ALL.iter().map(|&c| c.into()))
                         .chain(BooleanConversion::ALL.iter().map(|&c| c.into()))
                         .chain(ArrayConversion::ALL.iter().map(|&c| c.into()))
                         .collect()
}

const DETERMINISM_PAIRS: [(Determinism, Determinism); 4] =
    [(Determinism::Fixed, Determinism::Fixed),
     (Determinism::Fixed, Determinism::Random),
     (Determinism::Random, Determinism::Fixed),
     (Determinism::Random, Determinism::Random)];

#[test]
fn add_propagates_determinism() {
    let fixed = NumberOperator::Add.apply(&num(2.0), &num(3.0)).unwrap();
    assert_eq!(fixed, num(5.0));
    assert_eq!(fixed.tag(), Tag::Number);

    let random = NumberOperator::Add.apply(&num(2.0), &Value::random_number(3.0)).unwrap();
    assert_eq!(random.tag(), Tag::RandomNumber);
    assert_eq!(random.as_number("test").unwrap(), 5.0);
}

#[test]
fn every_operator_is_random_iff_an_operand_is_random() {
    for operator in Operator::ALL {
        let (left, right) = sample_operands(operator);

        for (l, r) in DETERMINISM_PAIRS {
            let result = operator.apply(&left.clone().with_determinism(l),
                                        &right.clone().with_determinism(r))
                                 .unwrap();

            assert_eq!(result.determinism().is_random(),
                       l.is_random() || r.is_random(),
                       "{operator} with {l:?}/{r:?}");
        }
    }
}

#[test]
fn result_type_table_agrees_with_runtime() {
    for operator in Operator::ALL {
        let (left, right) = sample_operands(operator);

        for (l, r) in DETERMINISM_PAIRS {
            let is_random = l.is_random() || r.is_random();
            let actual = operator.apply(&left.clone().with_determinism(l),
                                        &right.clone().with_determinism(r))
                                 .unwrap();

            assert_eq!(operator_result_type(operator).select(l.combine(r)), actual.tag());
            assert_eq!(predicted_tag(operator.family(), operator.name(), is_random),
                       Some(actual.tag()));
        }
    }
}

#[test]
fn conversion_table_agrees_with_runtime() {
    for conversion in all_conversions() {
        for determinism in [Determinism::Fixed, Determinism::Random] {
            let input = sample_input(conversion).with_determinism(determinism);
            let output = conversion.apply(&input).unwrap();

            assert_eq!(output.base(), conversion.target(), "{conversion}");
            assert_eq!(output.determinism(), determinism, "{conversion}");
            assert_eq!(conversion_result_type(conversion).select(determinism),
                       output.tag(),
                       "{conversion}");
        }
    }
}

#[test]
fn operator_list_covers_every_family_member() {
    let family_total = NumberOperator::ALL.len()
                       + StringOperator::ALL.len()
                       + ArrayOperator::ALL.len()
                       + GenericOperator::ALL.len();

    assert_eq!(Operator::ALL.len(), family_total);

    for operator in Operator::ALL {
        assert_eq!(Operator::from_name(operator.family(), operator.name()), Some(operator));
    }
}

#[test]
fn every_base_type_has_an_identity_conversion() {
    for base in BaseType::ALL {
        let identity = Conversion::identity(base);

        assert_eq!(identity.source(), base);
        assert_eq!(identity.target(), base);
        assert_eq!(Conversion::from_name(base, "identity"), Some(identity));

        let input = sample_input(identity).with_determinism(Determinism::Random);
        assert_eq!(identity.apply(&input).unwrap(), input);
    }
}

#[test]
fn operator_table_built_incrementally() {
    let mut table = OperatorTable::new();
    assert!(table.is_empty());

    let concat = OperationEntry::new(NumberConversion::Stringify,
                                     StringConversion::Identity,
                                     StringOperator::Concat);
    let equal = OperationEntry::new(BooleanConversion::Identity,
                                    BooleanConversion::Identity,
                                    GenericOperator::IsEqual);

    assert_eq!(table.insert(7, concat), None);
    assert_eq!(table.insert(8, concat), None);
    assert_eq!(table.insert(8, equal), Some(concat));
    assert_eq!(table.len(), 2);

    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_by_key(|&(id, _)| id);
    assert_eq!(entries, vec![(7, &concat), (8, &equal)]);

    let tree = node(7, num(4.0), Value::string("px"));
    assert_eq!(evaluate_tree(&tree, &table).unwrap(), Value::string("4px"));
    assert_eq!(evaluate_tree(&node(8, Value::boolean(true), Value::random_boolean(true)),
                             &table).unwrap(),
               Value::random_boolean(true));
}

#[test]
fn family_tables_resolve_names() {
    assert_eq!(OperatorFamily::from_name("array"), Some(OperatorFamily::Array));
    assert_eq!(NumberOperator::from_name("divide"), Some(NumberOperator::Divide));
    assert_eq!(StringConversion::from_name("toNumber"), Some(StringConversion::ParseInt));
    assert_eq!(NumberConversion::from_name("toString"), Some(NumberConversion::Stringify));
    assert_eq!(Conversion::from_name(BaseType::Number, "length"), None);
    assert_eq!(predicted_tag(OperatorFamily::Array, "includes", false), Some(Tag::Boolean));
    assert_eq!(predicted_tag(OperatorFamily::Array, "length", false), None);
}

#[test]
fn tree_matches_substitution_by_shape() {
    let first = node(MULTIPLY, node(ADD, num(100.0), num(200.0)), num(300.0));
    let third = node(MINUS,
                     node(MINUS,
                          node(ADD, num(400.0), num(500.0)),
                          node(ADD, num(500.0), num(600.0))),
                     node(MINUS, num(700.0), num(800.0)));
    let second = node(ADD, node(MULTIPLY, num(400.0), num(500.0)), third);
    let tree = node(DIVIDE, node(ADD, first, second), num(100.0));

    let expected = (((100.0 + 200.0) * 300.0)
                    + ((400.0 * 500.0) + (((400.0 + 500.0) - (500.0 + 600.0)) - (700.0 - 800.0))))
                   / 100.0;

    let result = evaluate_tree(&tree, &arithmetic_table()).unwrap();

    assert_eq!(result, num(expected));
    assert_eq!(result, num(2899.0));
}

#[test]
fn random_leaf_deep_in_tree_makes_root_random() {
    let tree = node(ADD,
                    node(MULTIPLY, num(2.0), node(MINUS, Value::random_number(5.0), num(1.0))),
                    num(1.0));

    assert_eq!(evaluate_tree(&tree, &arithmetic_table()).unwrap(),
               Value::random_number(9.0));
}

#[test]
fn conversions_run_on_intermediate_results() {
    const CONCAT_TEXT: u32 = 10;
    const LENGTH_PLUS: u32 = 11;

    let table = arithmetic_table().with(CONCAT_TEXT,
                                        OperationEntry::new(NumberConversion::Stringify,
                                                            StringConversion::Identity,
                                                            StringOperator::Concat))
                                  .with(LENGTH_PLUS,
                                        OperationEntry::new(ArrayConversion::Length,
                                                            StringConversion::ParseInt,
                                                            NumberOperator::Add));

    // toString(2 + 3) ++ " apples"
    let tree = node(CONCAT_TEXT, node(ADD, num(2.0), num(3.0)), Value::string(" apples"));
    assert_eq!(evaluate_tree(&tree, &table).unwrap(), Value::string("5 apples"));

    // length([a, b]) + toNumber(toString(2 + 3) ++ "0")
    let tree = node(LENGTH_PLUS,
                    Value::array(vec!["a".into(), "b".into()]),
                    node(CONCAT_TEXT, node(ADD, num(2.0), num(3.0)), Value::string("0")));
    assert_eq!(evaluate_tree(&tree, &table).unwrap(), num(52.0));
}

#[test]
fn conversion_rejects_intermediate_of_wrong_category() {
    const CONCAT: u32 = 20;

    let table = arithmetic_table().with(CONCAT,
                                        OperationEntry::new(StringConversion::Identity,
                                                            StringConversion::Identity,
                                                            StringOperator::Concat));

    let tree = node(CONCAT, node(ADD, num(1.0), num(1.0)), Value::string("x"));
    let err = evaluate_tree(&tree, &table).unwrap_err();

    assert_eq!(err,
               EvalError::TagMismatch { function: "identity",
                                        expected: "string or random-string",
                                        found:    Tag::Number, });
}

#[test]
fn check_tree_predicts_evaluated_tag() {
    const EQUALS: u32 = 30;
    const INCLUDES: u32 = 31;

    let table = arithmetic_table().with(EQUALS,
                                        OperationEntry::new(BooleanConversion::Identity,
                                                            BooleanConversion::Identity,
                                                            GenericOperator::IsEqual))
                                  .with(INCLUDES,
                                        OperationEntry::new(ArrayConversion::Identity,
                                                            NumberConversion::Identity,
                                                            ArrayOperator::Includes));

    let tree = node(EQUALS,
                    node(INCLUDES,
                         Value::random_array(vec![num(1.0), num(2.0)]),
                         node(ADD, num(1.0), num(1.0))),
                    Value::boolean(true));

    let predicted = check_tree(&tree, &table).unwrap();
    let actual = evaluate_tree(&tree, &table).unwrap();

    assert_eq!(predicted, Tag::RandomBoolean);
    assert_eq!(actual, Value::random_boolean(true));
}

#[test]
fn check_tree_rejects_what_evaluation_rejects() {
    const INCLUDES: u32 = 40;

    let table = OperatorTable::new().with(INCLUDES,
                                          OperationEntry::new(ArrayConversion::Identity,
                                                              ArrayConversion::Identity,
                                                              ArrayOperator::Includes));

    let tree = node(INCLUDES, Value::array(vec![]), Value::array(vec![]));

    let static_err = check_tree(&tree, &table).unwrap_err();
    let runtime_err = evaluate_tree(&tree, &table).unwrap_err();

    assert_eq!(static_err, runtime_err);
    assert!(static_err.is_tag_mismatch());
}

#[test]
fn comparable_is_symmetric_over_all_tags() {
    for a in Tag::ALL {
        for b in Tag::ALL {
            assert_eq!(tags_comparable(a, b), tags_comparable(b, a), "{a} / {b}");
            assert_eq!(tags_comparable(a, b), a.base() == b.base(), "{a} / {b}");
        }
    }
}

#[test]
fn is_equal_is_gated_by_comparable() {
    let samples = [num(1.0),
                   Value::random_string("1"),
                   Value::boolean(true),
                   Value::random_array(vec![num(1.0)])];

    for left in &samples {
        for right in &samples {
            let result = GenericOperator::IsEqual.apply(left, right);
            assert_eq!(result.is_ok(), comparable(left, right), "{left} / {right}");

            if let Err(err) = result {
                assert!(err.is_tag_mismatch());
                assert_eq!(err,
                           EvalError::NotComparable { function: "isEqual",
                                                      left:     left.tag(),
                                                      right:    right.tag(), });
            }
        }
    }
}

#[test]
fn failed_operator_leaves_operands_unchanged() {
    let left = Value::array(vec![num(1.0)]);
    let right = Value::random_string("x");
    let (left_before, right_before) = (left.clone(), right.clone());

    let err = NumberOperator::Add.apply(&left, &right).unwrap_err();

    assert!(matches!(err, EvalError::TagMismatch { found: Tag::Array, .. }));
    assert_eq!(left, left_before);
    assert_eq!(right, right_before);
}

#[test]
fn failed_tree_leaves_tree_and_table_unchanged() {
    let table = arithmetic_table();
    let tree = node(ADD, node(MULTIPLY, num(2.0), Value::string("2")), num(1.0));
    let (tree_before, table_before) = (tree.clone(), table.clone());

    assert!(evaluate_tree(&tree, &table).is_err());
    assert_eq!(tree, tree_before);
    assert_eq!(table, table_before);
}

#[test]
fn array_operations() {
    let three = Value::array(vec![num(1.0), Value::string("b"), Value::boolean(false)]);
    assert_eq!(ArrayConversion::Length.apply(&three).unwrap(), num(3.0));

    let one_two = Value::array(vec![num(1.0), num(2.0)]);
    assert_eq!(ArrayOperator::Includes.apply(&one_two, &num(2.0)).unwrap(),
               Value::boolean(true));
    assert_eq!(ArrayOperator::Includes.apply(&one_two, &num(5.0)).unwrap(),
               Value::boolean(false));
    assert_eq!(ArrayOperator::Includes.apply(&one_two, &Value::string("2")).unwrap(),
               Value::boolean(false));
}

#[test]
fn includes_requires_array_left_and_scalar_right() {
    let array = Value::array(vec![num(1.0)]);

    assert!(ArrayOperator::Includes.apply(&num(1.0), &num(1.0)).is_err());
    assert!(ArrayOperator::Includes.apply(&array, &array).is_err());
}

#[test]
fn number_text_uses_exponent_notation_at_extreme_magnitudes() {
    let large = NumberConversion::Stringify.apply(&num(1e21)).unwrap();
    assert_eq!(large, Value::string("1e+21"));
    assert_eq!(StringConversion::ParseInt.apply(&large).unwrap(), num(1.0));

    let tiny = NumberConversion::Stringify.apply(&Value::random_number(1e-7)).unwrap();
    assert_eq!(tiny, Value::random_string("1e-7"));

    assert_eq!(NumberConversion::Stringify.apply(&num(123_456.5)).unwrap(),
               Value::string("123456.5"));
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(NumberOperator::Divide.apply(&num(-1.0), &num(0.0)).unwrap(),
               num(f64::NEG_INFINITY));

    let nan = NumberOperator::Divide.apply(&num(0.0), &num(0.0)).unwrap();
    assert!(nan.as_number("test").unwrap().is_nan());
}

#[test]
fn unparsable_text_propagates_nan() {
    let table = OperatorTable::new().with(1,
                                          OperationEntry::new(StringConversion::ParseInt,
                                                              NumberConversion::Identity,
                                                              NumberOperator::Add));

    let tree = node(1, Value::string("twelve"), num(1.0));
    let result = evaluate_tree(&tree, &table).unwrap();

    assert!(result.is_number());
    assert!(matches!(result.payload(), Payload::Number(n) if n.is_nan()));
}

#[test]
fn tag_predicates_match_exactly_one_tag() {
    let values = [num(0.0),
                  Value::random_number(0.0),
                  Value::string(""),
                  Value::random_string(""),
                  Value::boolean(false),
                  Value::random_boolean(false),
                  Value::array(vec![]),
                  Value::random_array(vec![])];

    for (value, tag) in values.iter().zip(Tag::ALL) {
        let hits = [value.is_number(),
                    value.is_random_number(),
                    value.is_string(),
                    value.is_random_string(),
                    value.is_boolean(),
                    value.is_random_boolean(),
                    value.is_array(),
                    value.is_random_array()];

        assert_eq!(value.tag(), tag);
        assert_eq!(hits.iter().filter(|&&hit| hit).count(), 1, "{tag}");
        assert_eq!(Tag::from_name(tag.name()), Some(tag));
    }
}

#[test]
fn evaluate_pair_needs_two_value_leaves() {
    let pair = node(0, num(4.0), num(2.0));
    let result = evaluate_pair(&pair,
                               NumberConversion::Identity.into(),
                               NumberConversion::Identity.into(),
                               NumberOperator::Minus.into()).unwrap();
    assert_eq!(result, num(2.0));

    let nested = node(0, node(ADD, num(1.0), num(1.0)), num(2.0));
    let err = evaluate_pair(&nested,
                            NumberConversion::Identity.into(),
                            NumberConversion::Identity.into(),
                            NumberOperator::Minus.into()).unwrap_err();
    assert!(matches!(err, EvalError::StructuralMismatch { .. }));

    let nested_right = node(0, num(2.0), node(ADD, num(1.0), num(1.0)));
    assert!(matches!(evaluate_pair(&nested_right,
                                   NumberConversion::Identity.into(),
                                   NumberConversion::Identity.into(),
                                   NumberOperator::Minus.into()),
                     Err(EvalError::StructuralMismatch { .. })));
}

#[test]
fn unknown_operation_id_is_error() {
    let tree = node(ADD, node(99, num(1.0), num(1.0)), num(1.0));

    assert_eq!(evaluate_tree(&tree, &arithmetic_table()).unwrap_err(),
               EvalError::UnknownOperation { id: 99 });
    assert_eq!(check_tree(&tree, &arithmetic_table()).unwrap_err(),
               EvalError::UnknownOperation { id: 99 });
}

#[test]
fn depth_limit_is_opt_in() {
    let mut tree = node(ADD, num(0.0), num(1.0));
    for _ in 0..9 {
        tree = node(ADD, tree, num(1.0));
    }
    assert_eq!(tree.depth(), 10);

    let table = arithmetic_table();

    assert_eq!(evaluate_tree(&tree, &table).unwrap(), num(10.0));
    assert_eq!(Evaluator::with_max_depth(10).evaluate_tree(&tree, &table).unwrap(),
               num(10.0));
    assert_eq!(Evaluator::with_max_depth(9).evaluate_tree(&tree, &table).unwrap_err(),
               EvalError::DepthLimitExceeded { limit: 9 });
}

#[test]
fn trees_and_tables_are_shared_across_threads() {
    let table = arithmetic_table();
    let tree = node(MULTIPLY,
                    node(ADD, num(1.0), Value::random_number(2.0)),
                    num(3.0));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| evaluate_tree(&tree, &table)))
                                    .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), Value::random_number(9.0));
        }
    });
}
