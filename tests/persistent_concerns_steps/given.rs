//! Given steps for persistent record BDD scenarios.

use super::world::{RecordWorld, run_async};
use eyre::WrapErr;
use quickmail::messaging::domain::{
    CourseId, Message, MessageRecipient, NewMessage, NewMessageRecipient, OutputChannel, UserId,
};
use rstest_bdd_macros::given;

#[given("an empty message store")]
fn empty_message_store(world: &RecordWorld) -> Result<(), eyre::Report> {
    let rows = world.context.store().row_count("messages");
    if rows != 0 {
        return Err(eyre::eyre!("expected an empty store, found {rows} messages"));
    }
    Ok(())
}

#[given("{count:usize} stored messages")]
fn stored_messages(world: &mut RecordWorld, count: usize) -> Result<(), eyre::Report> {
    for _ in 0..count {
        let message = run_async(Message::create(
            &world.context,
            NewMessage::new(CourseId::new(1), UserId::new(1), OutputChannel::Email),
        ))
        .wrap_err("create message for scenario")?;
        world.messages.push(message);
    }
    Ok(())
}

#[given("a stored message with a recipient for user {user:i64}")]
fn message_with_recipient(world: &mut RecordWorld, user: i64) -> Result<(), eyre::Report> {
    let message = run_async(Message::create(
        &world.context,
        NewMessage::new(CourseId::new(1), UserId::new(1), OutputChannel::Message),
    ))
    .wrap_err("create parent message for scenario")?;
    let recipient = run_async(MessageRecipient::create(
        &world.context,
        NewMessageRecipient::for_message(&message, UserId::new(user)),
    ))
    .wrap_err("create recipient for scenario")?;
    world.messages.push(message);
    world.recipient = Some(recipient);
    Ok(())
}
