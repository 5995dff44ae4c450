autodoc_core::decl_indices!(GoIndices, {
    package => "package",
});

pub const GO_DEFINITIONS_SCM: &str = include_str!("go_definitions.scm");
