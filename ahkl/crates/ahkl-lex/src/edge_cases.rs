//! Edge case tests for ahkl-lex

#[cfg(test)]
mod tests {
    use crate::{AhkLexer, Document, FoldLevel, Quote, ScanState, StyleTag, TextDocument};

    fn lexer() -> AhkLexer {
        let mut lexer = AhkLexer::new();
        lexer.set_word_list(0, "if else loop return and or").unwrap();
        lexer.set_word_list(1, "msgbox send").unwrap();
        lexer.set_word_list(2, "@crlf").unwrap();
        lexer.set_word_list(3, "{enter} {tab}").unwrap();
        lexer.set_word_list(4, "#include #comments-start #comments-end").unwrap();
        lexer.set_word_list(5, "#region #endregion").unwrap();
        lexer.set_word_list(6, "btw").unwrap();
        lexer.set_word_list(7, "_udf").unwrap();
        lexer
    }

    fn styled(source: &str) -> TextDocument {
        let mut doc = TextDocument::new(source);
        lexer().restyle_all(&mut doc);
        doc
    }

    // ==================== SCANNER ====================

    #[test]
    fn test_edge_empty_source() {
        let doc = styled("");
        assert!(doc.styles().is_empty());
        assert_eq!(doc.fold_levels(), &[FoldLevel::new(0)]);
    }

    #[test]
    fn test_edge_quote_matching() {
        let doc = styled("\"it's\"");
        assert!(doc.styles().iter().all(|&s| s == StyleTag::String));
    }

    #[test]
    fn test_edge_hex_literal() {
        let doc = styled("0x1A2B");
        assert!(doc.styles().iter().all(|&s| s == StyleTag::Number));
    }

    #[test]
    fn test_edge_two_decimal_points() {
        let doc = styled("x := 1.2.3\n");
        assert!(doc.styles()[5..10].iter().all(|&s| s == StyleTag::Default));
    }

    #[test]
    fn test_edge_long_word_truncated() {
        // Past the word cap the table lookup sees a truncated word.
        let word = format!("if{}", "x".repeat(200));
        let doc = styled(&word);
        assert!(doc.styles().iter().all(|&s| s == StyleTag::Default));

        let mut lexer = lexer();
        let long = "k".repeat(120);
        lexer.set_word_list(0, &"k".repeat(99)).unwrap();
        let mut doc = TextDocument::new(long.as_str());
        lexer.restyle_all(&mut doc);
        assert!(doc.styles().iter().all(|&s| s == StyleTag::Keyword));
    }

    #[test]
    fn test_edge_crlf_line_comment() {
        let doc = styled("; c\r\nif\r\n");
        assert_eq!(doc.style_at(3), StyleTag::LineComment);
        assert_eq!(doc.style_at(4), StyleTag::Default);
        assert_eq!(doc.style_at(5), StyleTag::Keyword);
    }

    #[test]
    fn test_edge_lone_cr_line_end() {
        let doc = styled("#region x\rmsgbox");
        assert_eq!(doc.style_at(9), StyleTag::Default);
        assert_eq!(doc.style_at(10), StyleTag::Function);
    }

    #[test]
    fn test_edge_non_ascii_is_plain() {
        let doc = styled("caf\u{e9} := 1");
        assert_eq!(doc.style_at(3), StyleTag::Default);
        assert_eq!(doc.style_at(4), StyleTag::Default);
    }

    #[test]
    fn test_edge_comment_block_directive() {
        let doc = styled("#comments-start\nif\n#comments-end\n");
        assert!(doc.styles()[0..15]
            .iter()
            .all(|&s| s == StyleTag::Preprocessor));
        assert!(doc.styles()[19..32]
            .iter()
            .all(|&s| s == StyleTag::Preprocessor));
    }

    #[test]
    fn test_edge_minimal_block_comment() {
        let doc = styled("/*/ if");
        assert_eq!(&doc.styles()[0..3], &[StyleTag::BlockComment; 3]);
        assert_eq!(doc.style_at(4), StyleTag::Keyword);
    }

    #[test]
    fn test_edge_special_line_with_strings() {
        let doc = styled("#region \"x\" ; y\nz");
        assert!(doc.styles()[0..12].iter().all(|&s| s == StyleTag::Special));
        assert_eq!(doc.style_at(12), StyleTag::LineComment);
    }

    #[test]
    fn test_edge_send_key_validation() {
        let doc = styled("send \"{Enter}\"\nsend \"{Enter xyz}\"\n");
        assert!(doc.styles()[6..13].iter().all(|&s| s == StyleTag::SendKey));
        assert!(doc.styles()[20..33].iter().all(|&s| s == StyleTag::String));
    }

    #[test]
    fn test_edge_send_key_cut_by_line_end() {
        let doc = styled("\"{Enter\nx\"");
        assert!(doc.styles().iter().all(|&s| s == StyleTag::String));
    }

    #[test]
    fn test_edge_escaped_brace_is_not_send_key() {
        let doc = styled("\"`{Enter}\"");
        assert_eq!(doc.style_at(1), StyleTag::Assignment);
        assert_eq!(doc.style_at(2), StyleTag::Assignment);
        assert_eq!(doc.style_at(3), StyleTag::String);
    }

    #[test]
    fn test_edge_expand_at_end_of_document() {
        let doc = styled("x btw");
        assert_eq!(doc.style_at(2), StyleTag::Expand);
    }

    // ==================== RESTART ====================

    #[test]
    fn test_edge_continuation_restart() {
        let mut doc = styled("a := 1\nif x _\n  and y\n");
        let lexer = lexer();
        let restart = lexer.resolve_restart(&doc, 17);
        assert_eq!(restart.start, 7);

        doc.splice(17..17, b"z ");
        let restyle = lexer.restyle(&mut doc, 17);
        assert_eq!(restyle.range.start, 7);
    }

    #[test]
    fn test_edge_restart_inside_single_quoted_string() {
        let doc = styled("x := 'a \"b\nc'\n");
        let restart = lexer().resolve_restart(&doc, 12);
        assert_eq!(restart.state, ScanState::String(Quote::Single));
    }

    // ==================== FOLDING ====================

    #[test]
    fn test_edge_fold_balance() {
        let doc = styled("a() {\n  b()\n}\n");
        let levels = doc.fold_levels();
        let base = levels[0].level;
        assert!(levels[0].header);
        assert_eq!(levels[1], FoldLevel::new(base + 1));
        assert_eq!(levels[2], FoldLevel::new(base));
    }

    #[test]
    fn test_edge_fold_region_directives_do_not_fold() {
        let doc = styled("#region a\nx\n#endregion\n");
        assert!(doc.fold_levels().iter().all(|l| *l == FoldLevel::new(0)));
    }

    // ==================== PROPERTIES ====================

    mod properties {
        use super::{lexer, styled};
        use crate::{Document, StyleTag, TextDocument};
        use proptest::prelude::*;

        /// Source text built from the fragments that drive state changes.
        fn source() -> impl Strategy<Value = String> {
            let fragment = prop::sample::select(vec![
                "if", "msgbox", "x", "_", " ", " ", "\n", "\n", ";", "/*", "*/", "\"", "'",
                "`", "{", "}", "{enter}", "(", ")", "[", "]", "$v", ".", "0x1f", "1.2", "3e",
                ":=", "+", ",", "#region", "#comments-start", "btw", "@crlf", "_udf",
            ]);
            prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
        }

        proptest! {
            #[test]
            fn prop_full_rescan_is_idempotent(text in source()) {
                let lexer = lexer();
                let mut doc = TextDocument::new(text.as_str());
                lexer.restyle_all(&mut doc);
                let styles = doc.styles().to_vec();
                let folds = doc.fold_levels().to_vec();

                lexer.restyle_all(&mut doc);
                prop_assert_eq!(doc.styles(), &styles[..]);
                prop_assert_eq!(doc.fold_levels(), &folds[..]);
            }

            #[test]
            fn prop_incremental_matches_full(
                text in source(),
                insert in source(),
                at in 0usize..400,
                removed in 0usize..8,
            ) {
                let lexer = lexer();
                let mut doc = styled(&text);
                let start = at.min(doc.length());
                let end = (start + removed).min(doc.length());
                doc.splice(start..end, insert.as_bytes());
                lexer.restyle(&mut doc, start);

                let fresh = styled(std::str::from_utf8(doc.text()).unwrap());
                prop_assert_eq!(doc.styles(), fresh.styles());
                prop_assert_eq!(doc.fold_levels(), fresh.fold_levels());
            }

            #[test]
            fn prop_fold_markers_are_brackets(text in source()) {
                let doc = styled(&text);
                prop_assert_eq!(doc.styles().len(), text.len());
                for (&style, &ch) in doc.styles().iter().zip(doc.text()) {
                    if style == StyleTag::BracketFold {
                        prop_assert!(
                            matches!(ch, b'{' | b'}' | b'(' | b')' | b'[' | b']'),
                            "fold marker on byte {:?}",
                            ch as char
                        );
                    }
                }
            }
        }
    }
}
