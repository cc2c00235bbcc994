use crate::{
    config::VersionFormat,
    data::{
        javadoc::{parse_classes, parse_methods, DocIndexFetcher},
        version::{parse_json_version, parse_xml_version, VersionResolver},
        wiki::{parse_pages, WikiFeedFetcher},
    },
    error::{fetch::FetchError, format::FormatError, AppError},
    model::search::DocModule,
};
use test_utils::{builder::TestBuilder, context::TestContext, error::TestError, fixture};

mod version;

const LINK_URL: &str = "https://javadoc.io/doc/org.javacord";
