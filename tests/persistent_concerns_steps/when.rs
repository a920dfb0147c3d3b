//! When steps for persistent record BDD scenarios.

use super::world::{RecordWorld, run_async};
use eyre::WrapErr;
use quickmail::{
    messaging::domain::{CourseId, Message, NewMessage, OutputChannel, UserId},
    persistent::domain::PersistentRecord,
};
use rstest_bdd_macros::when;

#[when(r#"a message is created for course {course:i64} by user {user:i64} via "{channel}""#)]
fn create_message(
    world: &mut RecordWorld,
    course: i64,
    user: i64,
    channel: String,
) -> Result<(), eyre::Report> {
    let output_channel = OutputChannel::try_from(channel.as_str())?;
    let message = run_async(Message::create(
        &world.context,
        NewMessage::new(CourseId::new(course), UserId::new(user), output_channel),
    ))
    .wrap_err("create message")?;
    world.messages.push(message);
    Ok(())
}

#[when("the first message is hard deleted")]
fn hard_delete_first(world: &mut RecordWorld) -> Result<(), eyre::Report> {
    if world.messages.is_empty() {
        return Err(eyre::eyre!("no message to hard delete"));
    }
    let message = world.messages.remove(0);
    world.message_ids.push(message.id());
    run_async(world.context.hard_delete(&message)).wrap_err("hard delete first message")?;
    Ok(())
}

#[when("the second message is soft deleted")]
fn soft_delete_second(world: &mut RecordWorld) -> Result<(), eyre::Report> {
    let message = world
        .messages
        .first_mut()
        .ok_or_else(|| eyre::eyre!("no remaining message to soft delete"))?;
    world.message_ids.push(message.id());
    run_async(world.context.soft_delete(message)).wrap_err("soft delete second message")?;
    Ok(())
}

#[when("the recipient is soft deleted")]
fn soft_delete_recipient(world: &mut RecordWorld) -> Result<(), eyre::Report> {
    let recipient = world
        .recipient
        .as_mut()
        .ok_or_else(|| eyre::eyre!("no recipient in scenario world"))?;
    world.last_soft_delete = Some(run_async(world.context.soft_delete(recipient)));
    Ok(())
}
