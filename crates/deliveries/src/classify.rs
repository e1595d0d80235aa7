//! Splitting children by behavior.

use model::{
    child::{Behavior, Child},
    WithId,
};

/// Keeps the children with the given behavior, in their original order.
pub fn select(children: Vec<WithId<Child>>, behavior: Behavior) -> Vec<WithId<Child>> {
    children
        .into_iter()
        .filter(|child| child.content.behavior == behavior)
        .collect()
}

pub fn select_good(children: Vec<WithId<Child>>) -> Vec<WithId<Child>> {
    select(children, Behavior::Good)
}

pub fn select_bad(children: Vec<WithId<Child>>) -> Vec<WithId<Child>> {
    select(children, Behavior::Bad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use utility::id::Id;

    fn child(id: &str, behavior: Behavior) -> WithId<Child> {
        WithId::new(
            Id::new(id.to_owned()),
            Child {
                name: id.to_owned(),
                behavior,
                location: Id::new("l".to_owned()),
            },
        )
    }

    fn ids(children: &[WithId<Child>]) -> Vec<String> {
        children.iter().map(|child| child.id.raw()).collect()
    }

    #[test]
    fn partitions_preserving_order() {
        let children = vec![
            child("a", Behavior::Good),
            child("b", Behavior::Bad),
            child("c", Behavior::Good),
            child("d", Behavior::Bad),
        ];
        assert_eq!(ids(&select_good(children.clone())), vec!["a", "c"]);
        assert_eq!(ids(&select_bad(children)), vec!["b", "d"]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(select_good(vec![]).is_empty());
        assert!(select_bad(vec![]).is_empty());
    }

    #[test]
    fn nothing_matches() {
        let children = vec![child("a", Behavior::Good)];
        assert!(select_bad(children).is_empty());
    }
}
