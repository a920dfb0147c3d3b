//! Then steps for persistent record BDD scenarios.

use super::world::{RecordWorld, run_async};
use quickmail::{
    messaging::domain::{CourseId, Message, UserId},
    persistent::{
        domain::{PersistentDomainError, PersistentRecord, RecordId},
        services::RecordContextError,
    },
};
use rstest_bdd_macros::then;

fn deleted_id(world: &RecordWorld, position: usize) -> Result<RecordId, eyre::Report> {
    position
        .checked_sub(1)
        .and_then(|index| world.message_ids.get(index))
        .copied()
        .ok_or_else(|| eyre::eyre!("no deleted message at position {position}"))
}

#[then("the message belongs to course {course:i64} and user {user:i64}")]
fn message_belongs_to(world: &RecordWorld, course: i64, user: i64) -> Result<(), eyre::Report> {
    let message = world.message_at(1)?;
    if message.id().value() <= 0 {
        return Err(eyre::eyre!("expected a positive id, got {}", message.id()));
    }
    if !message.is_owned_by_course(CourseId::new(course)) {
        return Err(eyre::eyre!("expected course {course}, got {}", message.course_id()));
    }
    if !message.is_owned_by_user(UserId::new(user)) {
        return Err(eyre::eyre!("expected user {user}, got {}", message.user_id()));
    }
    Ok(())
}

#[then(r#"the message is delivered via "{channel}""#)]
fn message_delivered_via(world: &RecordWorld, channel: String) -> Result<(), eyre::Report> {
    let message = world.message_at(1)?;
    let actual = message.output_channel();
    if actual.as_str() != channel {
        return Err(eyre::eyre!("expected channel '{channel}', got '{actual}'"));
    }
    Ok(())
}

#[then("looking up the first message returns nothing")]
fn first_message_is_gone(world: &RecordWorld) -> Result<(), eyre::Report> {
    let id = deleted_id(world, 1)?;
    let found = run_async(world.context.find_or_null::<Message>(id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if found.is_some() {
        return Err(eyre::eyre!("expected message {id} to be hard deleted"));
    }
    Ok(())
}

#[then("looking up the second message returns a soft deleted row")]
fn second_message_is_soft_deleted(world: &RecordWorld) -> Result<(), eyre::Report> {
    let id = deleted_id(world, 2)?;
    let found = run_async(world.context.find_or_null::<Message>(id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("expected message {id} to remain after soft delete"))?;
    if found.time_deleted() <= 0 || !found.is_soft_deleted() {
        return Err(eyre::eyre!("expected message {id} to carry a deletion time"));
    }
    Ok(())
}

#[then("soft deletion fails with a capability error")]
fn soft_delete_rejected(world: &RecordWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_soft_delete
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing soft delete result in scenario world"))?;
    if !matches!(
        result,
        Err(RecordContextError::Domain(PersistentDomainError::Capability { .. }))
    ) {
        return Err(eyre::eyre!("expected capability error, got {result:?}"));
    }
    Ok(())
}

#[then("the recipient resolves its parent message")]
fn recipient_resolves_parent(world: &RecordWorld) -> Result<(), eyre::Report> {
    let recipient = world
        .recipient
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no recipient in scenario world"))?;
    let parent = run_async(recipient.get_message(&world.context))
        .map_err(|err| eyre::eyre!("get_message failed: {err}"))?;
    let expected = world.message_at(1)?;
    if parent.id() != expected.id() {
        return Err(eyre::eyre!(
            "expected parent {}, got {}",
            expected.id(),
            parent.id()
        ));
    }
    Ok(())
}
