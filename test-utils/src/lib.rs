use cool_lang::{
    ast::{Ast, CoolParser},
    typechecker::{analyze, Analysis, ErrorKind},
};

/// Parse a COOL source and run the full analysis pipeline on it.
pub fn analyze_source(source: &str) -> Analysis {
    let pairs = CoolParser::parse_program(source).expect("test source should parse");
    let ast = Ast::from_program(pairs);

    analyze(&ast)
}

/// What an analysis run is expected to report: the error kinds in order, each
/// with an excerpt its message must contain, and the exact inference lines.
pub struct Expected<'a> {
    pub errors: &'a [(ErrorKind, &'a str)],
    pub inferences: &'a [&'a str],
}

impl<'a> Expected<'a> {
    pub fn assert_matches(self, analysis: &Analysis) {
        assert_eq!(
            analysis.errors.len(),
            self.errors.len(),
            "unexpected error report: {:?}",
            analysis.errors
        );
        for (error, (kind, excerpt)) in analysis.errors.iter().zip(self.errors) {
            assert_eq!(error.kind, *kind, "unexpected kind of error \"{error}\"");
            assert!(
                error.message.contains(excerpt),
                "error \"{error}\" does not mention \"{excerpt}\""
            );
        }

        let inferences: Vec<&str> = analysis.inferences.iter().map(String::as_str).collect();
        assert_eq!(inferences, self.inferences, "unexpected inference report");
    }
}

/// Shorthand for sources that must analyze without any errors or inferences.
pub fn assert_clean(source: &str) -> Analysis {
    let analysis = analyze_source(source);
    Expected {
        errors: &[],
        inferences: &[],
    }
    .assert_matches(&analysis);

    analysis
}
