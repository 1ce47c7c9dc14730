/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the Smithy AWS Query protocol

use smithy_types::instant::Format;
use smithy_types::primitive::Encoder;
use smithy_types::{Instant, Number};
use std::borrow::Cow;
use urlencoding::encode;

/// Writes the top-level `Action` and `Version` of a Query request body, then hands out
/// value writers for each member.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    pub fn prefix<'b>(&'b mut self, prefix: &'b str) -> QueryValueWriter<'b> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {
        // Calling this drops the writer
    }
}

/// Writes a single member value under a dotted parameter name.
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> Self {
        QueryValueWriter { output, prefix }
    }

    /// Starts a nested member, eg. `Tags.Tag.1` + `Key` writes to `Tags.Tag.1.Key`
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(&Encoder::from(value).encode());
    }

    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    pub fn number(mut self, value: Number) {
        self.write_param_name();
        self.output.push_str(&Encoder::from(value).encode());
    }

    pub fn date_time(mut self, date_time: &Instant, format: Format) {
        self.write_param_name();
        self.output.push_str(&encode(&date_time.fmt(format)));
    }

    /// Starts a list. Non-flattened lists write their entries as
    /// `<prefix>.<member_override or "member">.<n>`, flattened ones as `<prefix>.<n>`.
    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter::new(self.output, self.prefix, flat, member_override)
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

/// Hands out value writers for consecutive, 1-indexed list entries.
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flat: bool,
        member_override: Option<&'a str>,
    ) -> Self {
        QueryListWriter {
            output,
            prefix,
            flat,
            member_override,
            next_index: 1,
        }
    }

    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!(
                "{}.{}.{}",
                self.prefix,
                self.member_override.unwrap_or("member"),
                self.next_index
            )
        };
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    pub fn finish(self) {
        // An empty list is still sent so the service can tell it apart from an absent one
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param_name();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use smithy_types::instant::Format;
    use smithy_types::{Instant, Number};

    #[test]
    fn no_params() {
        let mut out = String::new();
        let writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0", out);
    }

    #[test]
    fn query_list_writer_empty_list() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.prefix("myList").start_list(false, None).finish();
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0&myList=", out);
    }

    #[test]
    fn member_override_and_nested_structs() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateCluster", "2012-12-01");
        let mut tags = writer.prefix("Tags").start_list(false, Some("Tag"));
        for (k, v) in [("env", "prod"), ("team", "data eng")] {
            let mut entry = tags.entry();
            entry.prefix("Key").string(k);
            entry.prefix("Value").string(v);
        }
        tags.finish();
        writer.finish();
        assert_eq!(
            "Action=CreateCluster&Version=2012-12-01\
             &Tags.Tag.1.Key=env&Tags.Tag.1.Value=prod\
             &Tags.Tag.2.Key=team&Tags.Tag.2.Value=data%20eng",
            out
        );
    }

    #[test]
    fn flat_list_and_scalars() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        let mut list = writer.prefix("flat").start_list(true, None);
        list.entry().number(Number::from(5));
        list.entry().boolean(true);
        list.finish();
        writer
            .prefix("When")
            .date_time(&Instant::from_epoch_seconds(1576540098), Format::DateTime);
        writer.prefix("Weird").string("a&b=c+d/é");
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0&flat.1=5&flat.2=true\
             &When=2019-12-16T23%3A48%3A18Z&Weird=a%26b%3Dc%2Bd%2F%C3%A9",
            out
        );
    }
}
