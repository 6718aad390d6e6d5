use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use serde::{Deserialize, Serialize};

use crate::error::DetectorError;

/// The object an invocation was triggered for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEvent {
    pub bucket: String,
    pub key: String,
}

impl TryFrom<&S3Event> for UploadEvent {
    type Error = anyhow::Error;

    /// Only the first record is considered, s3 delivers one record per notification
    fn try_from(event: &S3Event) -> Result<Self, Self::Error> {
        let record = event.records.first().context("s3 event contained no records")?;

        let bucket = record.s3.bucket.name.clone().unwrap_or_default();
        let key = record
            .s3
            .object
            .key
            .as_deref()
            .map(decode_object_key)
            .unwrap_or_default();

        Ok(Self { bucket, key })
    }
}

/// Keys in s3 notifications are url encoded with `+` standing in for spaces.
/// A key that does not decode to utf-8 is returned as delivered.
pub fn decode_object_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::warn!(error=?e, key=%raw, "unable to decode key");
            raw.to_string()
        }
    }
}

/// One row of the hash table, keyed by content digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HashRecord {
    pub hash_key: String,
    /// The object key the digest was first seen under
    pub file_name: String,
}

/// What the hash table holds for a digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredDigest {
    Unseen,
    /// `original` is `None` when the stored item is not a readable [HashRecord]
    Seen { original: Option<HashRecord> },
}

/// The message published when content has been seen before
#[derive(Debug, Clone)]
pub struct DuplicateNotice<'a> {
    pub key: &'a str,
    pub digest: &'a str,
    pub original: Option<&'a HashRecord>,
}

impl std::fmt::Display for DuplicateNotice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Duplicate file detected: {} with hash {}",
            self.key, self.digest
        )?;
        if let Some(original) = self.original {
            write!(f, " (first seen as {})", original.file_name)?;
        }
        Ok(())
    }
}

pub const DUPLICATE_MESSAGE: &str = "Duplicate file detected and reported.";
pub const NEW_FILE_MESSAGE: &str = "New file processed.";

/// What the lambda hands back to its invoker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    /// json encoded [ResponseBody]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub message: String,
}

impl Response {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        let body = ResponseBody {
            message: message.into(),
        };
        let body = serde_json::to_string(&body).unwrap_or_default();
        Self { status_code, body }
    }

    pub fn duplicate() -> Self {
        Self::new(200, DUPLICATE_MESSAGE)
    }

    pub fn new_file() -> Self {
        Self::new(200, NEW_FILE_MESSAGE)
    }
}

#[cfg(test)]
impl Response {
    /// The message carried in the body
    pub fn message(&self) -> anyhow::Result<String> {
        let body: ResponseBody =
            serde_json::from_str(&self.body).context("response body is not a message")?;
        Ok(body.message)
    }
}

impl From<DetectorError> for Response {
    fn from(err: DetectorError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_lambda_events::event::s3::S3EventRecord;
    use serde_json::json;

    fn s3_event(bucket: &str, key: &str) -> S3Event {
        let mut record = S3EventRecord::default();
        record.s3.bucket.name = Some(bucket.to_string());
        record.s3.object.key = Some(key.to_string());

        let mut event = S3Event::default();
        event.records = vec![record];
        event
    }

    #[test]
    fn upload_event_from_first_record() {
        let mut event = s3_event("b1", "k1");
        let mut second = S3EventRecord::default();
        second.s3.bucket.name = Some("other".to_string());
        second.s3.object.key = Some("other".to_string());
        event.records.push(second);

        let upload = UploadEvent::try_from(&event).unwrap();
        assert_eq!(
            upload,
            UploadEvent {
                bucket: "b1".to_string(),
                key: "k1".to_string(),
            }
        );
    }

    #[test]
    fn upload_event_decodes_key() {
        let event = s3_event("b1", "reports/Q1+summary%282%29.pdf");
        let upload = UploadEvent::try_from(&event).unwrap();
        assert_eq!(upload.key, "reports/Q1 summary(2).pdf");
    }

    #[test]
    fn empty_event_is_an_error() {
        assert!(UploadEvent::try_from(&S3Event::default()).is_err());
    }

    #[test]
    fn undecodable_key_is_kept() {
        assert_eq!(decode_object_key("bad%FFkey"), "bad%FFkey");
        assert_eq!(decode_object_key("plain"), "plain");
    }

    #[test]
    fn hash_record_attribute_names() {
        let record = HashRecord {
            hash_key: "abc".to_string(),
            file_name: "k1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "HashKey": "abc", "FileName": "k1" })
        );
    }

    #[test]
    fn notice_mentions_key_and_digest() {
        let original = HashRecord {
            hash_key: "abc".to_string(),
            file_name: "k1".to_string(),
        };

        let notice = DuplicateNotice {
            key: "k2",
            digest: "abc",
            original: None,
        };
        assert_eq!(
            notice.to_string(),
            "Duplicate file detected: k2 with hash abc"
        );

        let notice = DuplicateNotice {
            original: Some(&original),
            ..notice
        };
        assert_eq!(
            notice.to_string(),
            "Duplicate file detected: k2 with hash abc (first seen as k1)"
        );
    }

    #[test]
    fn response_shape() {
        let response = Response::new_file();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 200,
                "body": "{\"message\":\"New file processed.\"}"
            })
        );
        assert_eq!(response.message().unwrap(), NEW_FILE_MESSAGE);
    }

    #[test]
    fn response_from_error() {
        let response = Response::from(DetectorError::BucketNotFound {
            bucket: "b1".to_string(),
        });
        assert_eq!(response.status_code, 404);
        assert_eq!(response.message().unwrap(), "Bucket 'b1' does not exist.");
    }
}
