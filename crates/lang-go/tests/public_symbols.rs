use autodoc_api::{FunctionSymbol, PublicSymbols};
use autodoc_core::plugin::LanguagePlugin;
use autodoc_core::render::DocRenderer;
use autodoc_go::GoPlugin;

fn collect(source: &str) -> PublicSymbols {
    let plugin = GoPlugin::new().expect("Failed to create GoPlugin");
    let (_tree, symbols) = plugin.collect(source).expect("Failed to parse Go source");
    symbols
}

fn names(symbols: &PublicSymbols) -> Vec<&str> {
    symbols.function_names().collect()
}

#[test]
fn test_only_exported_functions_are_collected() {
    let code = r#"
        // Some comment
        func main() {
            fmt.Println("Hello, World!")
        }

        // Public function comment
        func Foo() {
            fmt.Println("public")
        }

        // Private function comment
        func bar() {
            fmt.Println("private")
        }
    "#;

    let symbols = collect(code);
    assert_eq!(
        symbols.functions,
        [FunctionSymbol::new("Foo").with_comments(["// Public function comment"])]
    );
}

#[test]
fn test_unicode_uppercase_is_exported() {
    let code = "package p\n\nfunc Über() {}\n\nfunc über() {}\n";
    assert_eq!(names(&collect(code)), ["Über"]);
}

#[test]
fn test_functions_follow_source_order() {
    let code = "package p\n\nfunc Zeta() {}\nfunc Alpha() {}\nfunc Mid() {}\n";
    assert_eq!(names(&collect(code)), ["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_contiguous_comment_block_attaches() {
    let code = "package p\n\n// line A\n// line B\nfunc Foo() {}\n";
    assert_eq!(
        collect(code).functions,
        [FunctionSymbol::new("Foo").with_comments(["// line A", "// line B"])]
    );
}

#[test]
fn test_blank_line_does_not_break_comment_block() {
    let code = "package p\n\n// Detached but adjacent.\n\nfunc Foo() {}\n";
    assert_eq!(
        collect(code).functions[0].comments,
        ["// Detached but adjacent."]
    );
}

#[test]
fn test_intervening_declaration_breaks_comment_block() {
    let code = "package p\n\n// line A\n// line B\nvar x = 1\n\nfunc Foo() {}\n";
    let symbols = collect(code);
    assert_eq!(symbols.functions, [FunctionSymbol::new("Foo")]);
}

#[test]
fn test_methods_are_not_functions() {
    let code = "package p\n\ntype T struct{}\n\n// Method doc\nfunc (t T) Method() {}\n\nfunc Free() {}\n";
    assert_eq!(names(&collect(code)), ["Free"]);
}

#[test]
fn test_grouped_constants() {
    let code = r#"
package p

const (
    PublicConst1 = 1
    publicConst2 = 2
    PublicConst3 = 3
)
"#;
    let symbols = collect(code);
    assert_eq!(symbols.constants, ["PublicConst1", "PublicConst3"]);
    assert!(symbols.variables.is_empty());
    assert!(symbols.functions.is_empty());
}

#[test]
fn test_multi_name_spec() {
    let code = "package p\n\nconst A, b, C = 1, 2, 3\n";
    assert_eq!(collect(code).constants, ["A", "C"]);
}

#[test]
fn test_grouped_variables() {
    let code = r#"
package p

var (
    Exported int
    hidden   string
    Other, another = 1, 2
)

var Single = "x"
"#;
    assert_eq!(collect(code).variables, ["Exported", "Other", "Single"]);
}

#[test]
fn test_types_and_initializers_are_not_names() {
    let code = "package p\n\nconst a = B\nvar c Config\nvar d = Default()\n";
    let symbols = collect(code);
    assert!(symbols.constants.is_empty());
    assert!(symbols.variables.is_empty());
}

#[test]
fn test_empty_source() {
    assert_eq!(collect(""), PublicSymbols::default());
    assert_eq!(collect("package p\n"), PublicSymbols::default());
}

#[test]
fn test_embedded_sample_without_package_clause() {
    let code = r#"
	// top level coment
	const (
		String = "string"
	)

	// This is a comment
	// This is another comment
	func main() {
		fmt.Println("Hello, World!")
	}

	func Foo() {
		fmt.Println("public")
	}

	func Foo2() {
		fmt.Println("public")
	}

	func bar() {
		fmt.Println("private")
	}
	"#;

    let symbols = collect(code);
    assert_eq!(names(&symbols), ["Foo", "Foo2"]);
    assert_eq!(symbols.constants, ["String"]);
    assert!(symbols.functions.iter().all(|f| f.comments.is_empty()));
}

#[test]
fn test_collect_then_render() {
    let code = r#"package mathx

// Add adds two integers.
//
// It returns the sum of two integers.
func Add(a, b int) int {
    return a + b
}
"#;
    let symbols = collect(code);
    let md = DocRenderer::default().to_markdown(&symbols.functions[0]);
    assert_eq!(
        md,
        "Add adds two integers.\n\nIt returns the sum of two integers.\n\n```go\nAdd\n```\n"
    );
}

#[test]
fn test_parse_errors_are_skipped() {
    let plugin = GoPlugin::new().unwrap();

    let (_tree, symbols) = plugin
        .collect("package p\n\nfunc ( {{{ \nconst A = \nfunc Ok() {}\n")
        .unwrap();
    assert!(names(&symbols).iter().all(|name| !name.is_empty()));

    let code = "package p\n\n// Good is fine.\nfunc Good() {}\n\nfunc ( {{{ \nconst A = \n";
    let (tree, symbols) = plugin.collect(code).unwrap();
    assert!(tree.root_node().has_error());
    let good = symbols.functions.iter().find(|f| f.identifier == "Good").unwrap();
    assert_eq!(good.comments, ["// Good is fine."]);
}
