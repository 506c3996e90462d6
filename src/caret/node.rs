//! Rendered text trees

/// A node of a cell's rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    /// Text-bearing leaf
    Text(String),
    /// Structural node; contributes no text of its own
    Element { tag: String, children: Vec<TextNode> },
}

/// A text leaf found by [`TextNode::leaves`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<'a> {
    /// Child-index path from the root
    pub path: Vec<usize>,
    pub text: &'a str,
    /// Flattened offset of the leaf's first character
    pub start: usize,
    /// Length in characters
    pub len: usize,
}

impl TextNode {
    pub fn text(s: &str) -> Self {
        TextNode::Text(s.to_string())
    }

    pub fn element(tag: &str, children: Vec<TextNode>) -> Self {
        TextNode::Element {
            tag: tag.to_string(),
            children,
        }
    }

    /// The tree a cell renders for a plain string value
    pub fn from_text(s: &str) -> Self {
        let children = if s.is_empty() {
            Vec::new()
        } else {
            vec![TextNode::text(s)]
        };
        Self::element("div", children)
    }

    pub fn children(&self) -> &[TextNode] {
        match self {
            TextNode::Text(_) => &[],
            TextNode::Element { children, .. } => children,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, TextNode::Text(_))
    }

    /// Concatenated text of all leaves in document order
    pub fn flattened(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            TextNode::Text(s) => out.push_str(s),
            TextNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Length of the flattened text in characters
    pub fn text_len(&self) -> usize {
        match self {
            TextNode::Text(s) => s.chars().count(),
            TextNode::Element { children, .. } => children.iter().map(TextNode::text_len).sum(),
        }
    }

    /// Node addressed by a child-index path
    pub fn node_at(&self, path: &[usize]) -> Option<&TextNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    /// Flattened offset where the node at `path` begins, plus the node
    pub fn start_of(&self, path: &[usize]) -> Option<(usize, &TextNode)> {
        let mut node = self;
        let mut offset = 0;
        for &index in path {
            let children = node.children();
            let before = children.get(..index)?;
            offset += before.iter().map(TextNode::text_len).sum::<usize>();
            node = children.get(index)?;
        }
        Some((offset, node))
    }

    /// All text leaves in pre-order
    pub fn leaves(&self) -> Vec<Leaf<'_>> {
        let mut leaves = Vec::new();
        let mut offset = 0;
        // Children are pushed in reverse so they pop in document order
        let mut stack: Vec<(Vec<usize>, &TextNode)> = vec![(Vec::new(), self)];
        while let Some((path, node)) = stack.pop() {
            match node {
                TextNode::Text(s) => {
                    let len = s.chars().count();
                    leaves.push(Leaf {
                        path,
                        text: s,
                        start: offset,
                        len,
                    });
                    offset += len;
                }
                TextNode::Element { children, .. } => {
                    for (index, child) in children.iter().enumerate().rev() {
                        let mut child_path = path.clone();
                        child_path.push(index);
                        stack.push((child_path, child));
                    }
                }
            }
        }
        leaves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TextNode {
        TextNode::element(
            "div",
            vec![
                TextNode::text("ab"),
                TextNode::element("span", vec![TextNode::text("cd"), TextNode::text("e")]),
                TextNode::text("fg"),
            ],
        )
    }

    #[test]
    fn test_flattened_pre_order() {
        assert_eq!(sample().flattened(), "abcdefg");
        assert_eq!(sample().text_len(), 7);
    }

    #[test]
    fn test_leaves_have_running_offsets() {
        let tree = sample();
        let leaves = tree.leaves();
        let summary: Vec<(Vec<usize>, usize, usize)> = leaves
            .iter()
            .map(|l| (l.path.clone(), l.start, l.len))
            .collect();
        assert_eq!(
            summary,
            vec![
                (vec![0], 0, 2),
                (vec![1, 0], 2, 2),
                (vec![1, 1], 4, 1),
                (vec![2], 5, 2),
            ]
        );
    }

    #[test]
    fn test_start_of_nested() {
        let tree = sample();
        let (offset, node) = tree.start_of(&[1, 1]).unwrap();
        assert_eq!(offset, 4);
        assert_eq!(node, &TextNode::text("e"));
        assert!(tree.start_of(&[5]).is_none());
    }

    #[test]
    fn test_from_empty_text_has_no_leaves() {
        let tree = TextNode::from_text("");
        assert!(tree.leaves().is_empty());
        assert_eq!(tree.text_len(), 0);
    }

    #[test]
    fn test_text_len_counts_chars_not_bytes() {
        assert_eq!(TextNode::text("héllo").text_len(), 5);
    }
}
