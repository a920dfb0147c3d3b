//! Diesel schema for message persistence.

diesel::table! {
    /// Outbound messages.
    messages (id) {
        /// Store-assigned message identifier.
        id -> Int8,
        /// Owning course identifier.
        course_id -> Int8,
        /// Authoring user identifier.
        user_id -> Int8,
        /// Delivery channel (`email`, `message`).
        #[max_length = 50]
        output_channel -> Varchar,
        /// Creation time in epoch seconds.
        timecreated -> Int8,
        /// Soft-delete time in epoch seconds, `0` while active.
        timedeleted -> Int8,
    }
}

diesel::table! {
    /// Recipients attached to messages.
    message_recipients (id) {
        /// Store-assigned recipient identifier.
        id -> Int8,
        /// Parent message identifier.
        message_id -> Int8,
        /// Receiving user identifier.
        user_id -> Int8,
        /// Creation time in epoch seconds.
        timecreated -> Int8,
    }
}
