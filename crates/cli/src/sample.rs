use autodoc_core::plugin::LanguagePlugin;
use autodoc_go::GoPlugin;

const SAMPLE: &str = r#"
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

/// Exported function names of the built-in sample.
pub(crate) fn exported_functions() -> Vec<String> {
    let plugin = GoPlugin::new().expect("Go grammar must load");
    let (_tree, symbols) = plugin
        .collect(SAMPLE)
        .expect("built-in sample must parse");
    symbols.functions.into_iter().map(|f| f.identifier).collect()
}

pub fn run() {
    for name in exported_functions() {
        println!("{}", name);
    }
}
