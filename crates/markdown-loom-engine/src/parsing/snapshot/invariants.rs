use crate::parsing::tokens::Token;

/// Asserts the structural range invariants of a scanned tree.
///
/// - sibling ranges are ordered and do not overlap
/// - every child range lies inside its parent's range
/// - only `Document` and `List` may span several lines
///
/// Panics with the offending tokens on the first violation.
pub fn check(root: &Token) {
    check_node(root);
}

fn check_node(token: &Token) {
    let range = token.range();
    assert!(
        range.start <= range.end,
        "range ends before it starts: {token:?}"
    );
    if !matches!(token, Token::Document { .. } | Token::List { .. }) {
        assert!(range.is_single_line(), "multi-line range: {token:?}");
    }

    let Some(children) = token.children() else {
        return;
    };

    for child in children {
        assert!(
            range.encloses(child.range()),
            "child {:?} outside parent {:?}",
            child.range(),
            range
        );
        check_node(child);
    }

    for pair in children.windows(2) {
        assert!(
            pair[0].range().end <= pair[1].range().start,
            "siblings overlap or are out of order: {:?} then {:?}",
            pair[0],
            pair[1]
        );
        assert!(
            pair[0].range().start < pair[1].range().start,
            "siblings start at the same position: {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}
