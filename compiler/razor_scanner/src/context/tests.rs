use super::*;
use pretty_assertions::assert_eq;

#[test]
fn tag_bytes_are_stable() {
    assert_eq!(ContextTag::Brace.as_byte(), 1);
    assert_eq!(ContextTag::Paren.as_byte(), 2);
    assert_eq!(std::mem::size_of::<ContextTag>(), 1);
}

#[test]
fn tag_from_byte() {
    assert_eq!(ContextTag::try_from(1u8), Ok(ContextTag::Brace));
    assert_eq!(ContextTag::try_from(2u8), Ok(ContextTag::Paren));
    assert_eq!(ContextTag::try_from(0u8), Err(0));
    assert_eq!(ContextTag::try_from(7u8), Err(7));
}

#[test]
fn new_stack_is_markup() {
    let stack = ModeStack::new();
    assert!(stack.is_markup());
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.top(), None);
}

#[test]
fn push_and_pop_matching() {
    let mut stack = ModeStack::new();
    stack.push(ContextTag::Brace);
    stack.push(ContextTag::Paren);
    assert_eq!(stack.top(), Some(ContextTag::Paren));
    assert_eq!(stack.pop_if_closes(')'), Some(ContextTag::Paren));
    assert_eq!(stack.pop_if_closes('}'), Some(ContextTag::Brace));
    assert!(stack.is_markup());
}

#[test]
fn mismatched_closer_is_not_consumed() {
    let mut stack: ModeStack = [ContextTag::Brace].into_iter().collect();
    assert_eq!(stack.pop_if_closes(')'), None);
    assert_eq!(stack.depth(), 1);

    let mut stack: ModeStack = [ContextTag::Paren].into_iter().collect();
    assert_eq!(stack.pop_if_closes('}'), None);
    assert_eq!(stack.depth(), 1);
}

#[test]
fn pop_on_empty_stack() {
    let mut stack = ModeStack::new();
    assert_eq!(stack.pop_if_closes('}'), None);
    assert_eq!(stack.pop_if_closes(')'), None);
    assert!(stack.is_markup());
}

#[test]
fn iter_is_outermost_first() {
    let mut stack = ModeStack::new();
    stack.extend([ContextTag::Paren, ContextTag::Brace, ContextTag::Brace]);
    let tags: Vec<_> = stack.iter().collect();
    assert_eq!(
        tags,
        vec![ContextTag::Paren, ContextTag::Brace, ContextTag::Brace]
    );
    stack.clear();
    assert!(stack.is_markup());
}

#[test]
fn grows_past_inline_capacity() {
    let mut stack = ModeStack::new();
    for _ in 0..100 {
        stack.push(ContextTag::Brace);
    }
    assert_eq!(stack.depth(), 100);
    for _ in 0..100 {
        assert_eq!(stack.pop_if_closes('}'), Some(ContextTag::Brace));
    }
    assert!(stack.is_markup());
}

mod proptest_nesting {
    use super::super::*;
    use proptest::prelude::*;

    fn tag() -> impl Strategy<Value = ContextTag> {
        prop_oneof![Just(ContextTag::Brace), Just(ContextTag::Paren)]
    }

    proptest! {
        #[test]
        fn balanced_sequence_restores_depth(
            prefix in proptest::collection::vec(tag(), 0..16),
            opens in proptest::collection::vec(tag(), 0..64),
        ) {
            let mut stack: ModeStack = prefix.iter().copied().collect();
            let before = stack.clone();
            for &tag in &opens {
                stack.push(tag);
            }
            for &tag in opens.iter().rev() {
                prop_assert_eq!(stack.pop_if_closes(tag.closer()), Some(tag));
            }
            prop_assert_eq!(stack, before);
        }
    }
}
