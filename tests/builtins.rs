use test_utils::assert_clean;

const HELLO: &str = r#"
class Main inherits IO {
    main(): Object { out_string("hi") };
};
"#;

#[test]
fn analyze_hello() {
    let analysis = assert_clean(HELLO);

    let context = &analysis.context;
    let main = context.get_type("Main").unwrap();
    let method = context.get_method(main, "main").unwrap();
    assert_eq!(context[method.return_type].name, "Object");
}

const CHAINED_IO: &str = r#"
class Main inherits IO {
    main(): Object {
        out_string("The answer is ").out_int(42).out_string("\n")
    };
};
"#;

#[test]
fn io_methods_chain_through_self_type() {
    assert_clean(CHAINED_IO);
}

const STRING_OPS: &str = r#"
class Main inherits IO {
    greet(name: String): String {
        "Hello, ".concat(name).substr(0, 5)
    };

    main(): Object { out_string(greet("world")) };
};
"#;

#[test]
fn string_builtins_are_installed() {
    let analysis = assert_clean(STRING_OPS);

    let context = &analysis.context;
    let string = context.get_type("String").unwrap();
    assert!(context.get_method(string, "length").is_ok());
    assert!(context.get_method(string, "concat").is_ok());
    assert!(context.get_method(string, "substr").is_ok());
}

const INHERITED_OBJECT_METHODS: &str = r#"
class A { };

class Main inherits IO {
    main(): Object { out_string((new A).type_name()) };
};
"#;

#[test]
fn object_methods_are_visible_on_subclasses() {
    assert_clean(INHERITED_OBJECT_METHODS);
}

#[test]
fn primitives_are_sealed_and_rooted() {
    let analysis = assert_clean(HELLO);

    let context = &analysis.context;
    let object = context.get_type("Object").unwrap();
    for name in ["Int", "String", "Bool"] {
        let ty = context.get_type(name).unwrap();
        assert!(context[ty].sealed, "{name} should be sealed");
        assert_eq!(context[ty].parent, Some(object));
    }
    assert_eq!(context[object].parent, None);
}
