//! Properties of the whole Lexer → Parser → Interpreter pipeline

use condlang::analyze;
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "IF", "THEN", "ELSE", "ELSEIF", "END IF", "0", "1", "42", "true", "false", "x", "+", "-", "*",
    "/", ">", "<", "==", "AND", "OR", "12ab", "1=2", "#", "7_",
];

fn statement() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..24).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn test_corrected_code_is_clean(source in statement()) {
        let first = analyze(&source);
        let second = analyze(&first.formatted());

        prop_assert!(
            second.diagnostics.is_empty(),
            "{:?} -> {:?} -> {:?}",
            source,
            first.formatted(),
            second.diagnostics
        );
        prop_assert_eq!(&second.tokens, &first.tokens);
        prop_assert_eq!(second.result, first.result);
    }

    #[test]
    fn test_any_input_is_total(source in "\\PC{0,64}") {
        let analysis = analyze(&source);
        let rendered = analysis.render();
        prop_assert!(
            rendered.contains("Interpretation result") || rendered.contains("Cannot interpret")
        );
    }
}
