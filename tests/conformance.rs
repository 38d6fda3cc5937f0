use test_utils::assert_clean;

const HIERARCHY: &str = r#"
class A { };
class B inherits A { };
class C inherits A { };
class D inherits B { };

class Main {
    main(): Object { 0 };
};
"#;

#[test]
fn conformance_is_reflexive_and_transitive() {
    let analysis = assert_clean(HIERARCHY);
    let context = &analysis.context;

    let object = context.get_type("Object").unwrap();
    let a = context.get_type("A").unwrap();
    let b = context.get_type("B").unwrap();
    let d = context.get_type("D").unwrap();

    for ty in [object, a, b, d] {
        assert!(context.conforms_to(ty, ty), "reflexivity");
    }

    assert!(context.conforms_to(d, b));
    assert!(context.conforms_to(b, a));
    assert!(context.conforms_to(d, a), "transitivity");
    assert!(context.conforms_to(d, object));

    assert!(!context.conforms_to(a, b));
    assert!(!context.conforms_to(b, d));
}

#[test]
fn type_union_is_a_least_upper_bound() {
    let analysis = assert_clean(HIERARCHY);
    let context = &analysis.context;

    let object = context.get_type("Object").unwrap();
    let a = context.get_type("A").unwrap();
    let b = context.get_type("B").unwrap();
    let c = context.get_type("C").unwrap();
    let d = context.get_type("D").unwrap();
    let int = context.get_type("Int").unwrap();

    // union(X, X) = X
    for ty in [object, a, b, c, d, int] {
        assert_eq!(context.type_union(ty, ty), ty);
    }

    // commutativity
    for left in [object, a, b, c, d, int] {
        for right in [object, a, b, c, d, int] {
            assert_eq!(context.type_union(left, right), context.type_union(right, left));
        }
    }

    assert_eq!(context.type_union(b, c), a);
    assert_eq!(context.type_union(d, c), a);
    assert_eq!(context.type_union(d, b), b);
    assert_eq!(context.type_union(a, int), object);
}

#[test]
fn sentinels_follow_their_special_rules() {
    let analysis = assert_clean(HIERARCHY);
    let context = &analysis.context;

    let a = context.get_type("A").unwrap();
    let self_type = context.self_type();
    let auto = context.auto_type();
    let error = context.error_type();
    let void = context.void_type();

    // SELF_TYPE conforms to nothing, but everything conforms to it
    assert!(!context.conforms_to(self_type, a));
    assert!(!context.conforms_to(self_type, self_type));
    assert!(context.conforms_to(a, self_type));

    // AUTO_TYPE and <error> conform both ways
    for sentinel in [auto, error] {
        assert!(context.conforms_to(sentinel, a));
        assert!(context.conforms_to(a, sentinel));
    }

    // <void> only conforms to itself
    assert!(context.conforms_to(void, void));
    assert!(!context.conforms_to(void, a));
    assert!(!context.conforms_to(a, void));

    // AUTO_TYPE and <error> absorb in unions
    assert_eq!(context.type_union(auto, a), auto);
    assert_eq!(context.type_union(a, error), error);
}
