//! Tests for longer mutation sequences
//!
//! This tests:
//! - Move permutations and round trips
//! - Interleaved add / move / delete chains
//! - Document integrity after every step

use webcraft_editor::{BlockDocument, EditSession, Mutation, MutationError};
use webcraft_model::{builtin_templates, BlockId};

fn full_session() -> EditSession {
    let mut session = EditSession::new("seq", BlockDocument::new("Sequences"));
    for template in builtin_templates() {
        session.add_block(template).unwrap();
    }
    session
}

fn ids(session: &EditSession) -> Vec<BlockId> {
    session.document.blocks().iter().map(|b| b.id.clone()).collect()
}

fn assert_integrity(session: &EditSession) {
    let blocks = session.document.blocks();
    for (index, block) in blocks.iter().enumerate() {
        assert_eq!(block.position, index);
    }
    let mut unique = ids(session);
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), blocks.len(), "duplicate block ids");
}

#[test]
fn test_every_move_is_a_splice() {
    let len = full_session().document.len();

    for from in 0..len {
        for to in 0..len {
            let mut session = full_session();
            let before = ids(&session);

            session.move_block(from, to).unwrap();

            let mut expected = before.clone();
            let moved = expected.remove(from);
            expected.insert(to, moved);
            assert_eq!(ids(&session), expected, "move {from} -> {to}");
            assert_integrity(&session);
        }
    }
}

#[test]
fn test_move_round_trip_restores_order() {
    let len = full_session().document.len();

    for from in 0..len {
        for to in 0..len {
            let mut session = full_session();
            let before = ids(&session);

            session.move_block(from, to).unwrap();
            session.move_block(to, from).unwrap();
            assert_eq!(ids(&session), before, "round trip {from} <-> {to}");
        }
    }
}

#[test]
fn test_out_of_range_move_is_rejected() {
    let mut session = full_session();
    let len = session.document.len();
    let before = session.document.clone();

    let err = session
        .apply(Mutation::MoveBlock { from: 0, to: len })
        .unwrap_err();

    assert!(err.to_string().contains("out of range"));
    assert_eq!(session.document, before);
}

#[test]
fn test_duplicate_add_is_rejected() {
    let mut session = full_session();
    let existing = session.document.blocks()[0].clone();

    let err = session
        .document
        .apply(Mutation::AddBlock { block: existing.clone() })
        .unwrap_err();
    assert_eq!(err, MutationError::DuplicateBlock(existing.id));
}

#[test]
fn test_interleaved_chain_keeps_integrity() {
    let mut session = full_session();
    let templates = builtin_templates();

    for step in 0..30 {
        match step % 3 {
            0 => {
                let len = session.document.len();
                session.move_block(step % len, (step * 7) % len).unwrap();
            }
            1 => {
                let target = ids(&session)[step % session.document.len()].clone();
                session.delete_block(&target).unwrap();
                assert!(session.document.get(&target).is_none());
            }
            _ => {
                session
                    .add_block(&templates[step % templates.len()])
                    .unwrap();
            }
        }
        assert_integrity(&session);
    }
}

#[test]
fn test_version_counts_effective_mutations() {
    let mut session = full_session();
    let start = session.document.version;

    session.move_block(0, 0).unwrap();
    session.delete_block(&BlockId::from("block-nope")).unwrap();
    assert_eq!(session.document.version, start);

    session.move_block(0, 1).unwrap();
    assert_eq!(session.document.version, start + 1);
}
