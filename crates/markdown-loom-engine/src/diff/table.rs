use crate::parsing::tokens::Token;

/// Levenshtein table over two sibling lists, matching on token kind only.
///
/// `get(i, j)` is the edit distance between the first `i` old tokens and
/// the first `j` new tokens.
pub struct EditTable {
    cols: usize,
    cells: Vec<usize>,
}

impl EditTable {
    pub fn build(old: &[Token], new: &[Token]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut table = Self {
            cols,
            cells: vec![0; rows * cols],
        };

        for i in 0..rows {
            table.set(i, 0, i);
        }
        for j in 0..cols {
            table.set(0, j, j);
        }

        for i in 1..rows {
            for j in 1..cols {
                let diag = table.get(i - 1, j - 1);
                let cost = if old[i - 1].kind() == new[j - 1].kind() {
                    diag
                } else {
                    let top = table.get(i - 1, j);
                    let left = table.get(i, j - 1);
                    1 + top.min(left).min(diag)
                };
                table.set(i, j, cost);
            }
        }

        table
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    /// The full edit distance.
    pub fn distance(&self) -> usize {
        self.cells.last().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::scan;

    fn blocks(s: &str) -> Vec<Token> {
        match scan(s) {
            Token::Document { tokens, .. } => tokens,
            other => panic!("expected Document, got {other:?}"),
        }
    }

    #[test]
    fn identical_kinds_cost_nothing() {
        let a = blocks("# a\nb");
        let b = blocks("## c\nd");
        assert_eq!(EditTable::build(&a, &b).distance(), 0);
    }

    #[test]
    fn borders_count_insertions_and_deletions() {
        let a = blocks("a\n---\n> q");
        let table = EditTable::build(&a, &[]);
        assert_eq!(table.distance(), 3);
        assert_eq!(table.get(2, 0), 2);

        let table = EditTable::build(&[], &a);
        assert_eq!(table.get(0, 3), 3);
    }

    #[test]
    fn kind_change_costs_one() {
        let a = blocks("# a");
        let b = blocks("a");
        assert_eq!(EditTable::build(&a, &b).distance(), 1);
    }
}
