use serde_json::json;
use test_utils::serenity::{
    command::{boolean_option, string_option},
    create_test_command_data,
};

use crate::{
    bot::command::{
        args::{parse_options, parse_text, split_command},
        BotCommand, Invocation,
    },
    model::search::{DocSearchType, DocsQuery, WikiQuery, WikiSearchCriteria},
};

mod args;
