use crate::byte_string::ByteString;
use crate::value::TagValue;

/// One event of a pre-order tree walk.
///
/// Every tag produces an `Enter`. Containers additionally produce an
/// `Exit` once all of their children have been visited, which is where a
/// printer closes a bracket. Depth counts from 0 at the walk's start.
#[derive(Clone, Copy, Debug)]
pub enum Visit<'a> {
    Enter {
        /// Entry name for the walk root and compound members; `None` for
        /// list elements.
        name: Option<&'a ByteString>,
        value: &'a TagValue,
        depth: usize,
    },
    Exit {
        value: &'a TagValue,
        depth: usize,
    },
}

enum Step<'a> {
    Enter(Option<&'a ByteString>, &'a TagValue, usize),
    Exit(&'a TagValue, usize),
}

/// Iterative pre-order walker over a decoded tree.
///
/// Keeps its own stack on the heap, so it handles any depth the decoder
/// can produce. Compound members are visited in byte-wise name order,
/// which makes every consumer (printers, statistics) deterministic.
///
/// ```text
///   Compound("")          Enter "" (0)
///   ├── a: Int            Enter a  (1)
///   └── b: List           Enter b  (1)
///       └── Byte          Enter    (2)
///                         Exit  b  (1)
///                         Exit  "" (0)
/// ```
pub struct Walk<'a> {
    stack: Vec<Step<'a>>,
}

impl<'a> Walk<'a> {
    #[must_use]
    pub fn new(value: &'a TagValue, name: Option<&'a ByteString>) -> Self {
        Self {
            stack: vec![Step::Enter(name, value, 0)],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Step::Exit(value, depth) => Some(Visit::Exit { value, depth }),
            Step::Enter(name, value, depth) => {
                match value {
                    TagValue::List(list) => {
                        self.stack.push(Step::Exit(value, depth));
                        self.stack.extend(
                            list.iter()
                                .rev()
                                .map(|child| Step::Enter(None, child, depth + 1)),
                        );
                    }
                    TagValue::Compound(compound) => {
                        self.stack.push(Step::Exit(value, depth));
                        self.stack.extend(
                            compound
                                .sorted_entries()
                                .into_iter()
                                .rev()
                                .map(|(key, child)| Step::Enter(Some(key), child, depth + 1)),
                        );
                    }
                    _ => {}
                }
                Some(Visit::Enter { name, value, depth })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::Compound;
    use crate::kind::TagKind;
    use crate::list::TagList;
    use crate::value::RootTag;

    fn describe(visit: &Visit<'_>) -> String {
        match visit {
            Visit::Enter { name, value, depth } => format!(
                "enter {} {:?} @{depth}",
                name.map_or_else(|| "-".to_string(), ToString::to_string),
                value.kind()
            ),
            Visit::Exit { value, depth } => format!("exit {:?} @{depth}", value.kind()),
        }
    }

    #[test]
    fn leaf_yields_single_enter() {
        let value = TagValue::Int(3);
        let events: Vec<_> = Walk::new(&value, None).map(|v| describe(&v)).collect();
        assert_eq!(events, ["enter - Int @0"]);
    }

    #[test]
    fn preorder_with_sorted_members() {
        let mut list = TagList::new(TagKind::Byte);
        list.push(TagValue::Byte(1)).unwrap();
        let mut c = Compound::new();
        c.insert("b", TagValue::List(list));
        c.insert("a", TagValue::Int(0));
        let root = RootTag::new("root", TagValue::Compound(c));

        let events: Vec<_> = root.walk().map(|v| describe(&v)).collect();
        assert_eq!(
            events,
            [
                "enter root Compound @0",
                "enter a Int @1",
                "enter b List @1",
                "enter - Byte @2",
                "exit List @1",
                "exit Compound @0",
            ]
        );
    }

    #[test]
    fn empty_containers_still_exit() {
        let value = TagValue::Compound(Compound::new());
        assert_eq!(Walk::new(&value, None).count(), 2);
    }
}
