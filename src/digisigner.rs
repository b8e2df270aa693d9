//! A client for the DigiSigner REST API.
//!
//! The client does not own an HTTP stack. Each operation returns an [`ApiCall`]: a fully built
//! [`ApiRequest`] plus the decoder for its response. Callers either execute the request
//! themselves and feed the status and body back to [`ApiCall::decode`], or hand a
//! [`Transport`] to [`DigiSigner::execute`].
use crate::randutil;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

pub const DIGISIGNER_API_URL: &str = "https://api.digisigner.com/v1";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("DigiSigner API key is required")]
    MissingApiKey,
    #[error("DigiSigner API error: {status} {body}")]
    Status { status: u16, body: String },
    #[error("DigiSigner upload error: {status} {body}")]
    Upload { status: u16, body: String },
    #[error("DigiSigner JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("DigiSigner transport error: {0}")]
    Transport(Box<dyn StdError + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Signature,
    Text,
    Date,
    Checkbox,
}

/// A field to place on the document, positioned in page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// 1-based signer order this field belongs to.
    pub signer_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureRequest {
    #[serde(alias = "documentId")]
    pub document_id: String,
    pub signers: Vec<Signer>,
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub document_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub signature_request_id: String,
    /// Signer email to signing URL.
    pub signing_urls: BTreeMap<String, String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureStatus {
    pub status: String,
    #[serde(default)]
    pub signed_document_url: Option<String>,
}

/// A field as reported back by the service for an existing document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentField {
    pub api_id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub page: u32,
    /// `[x1, y1, x2, y2]`.
    #[serde(default)]
    pub rectangle: Vec<f64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFields {
    pub document_fields: Vec<DocumentField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignerPayload<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub role: String,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldPayload<'a> {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub page: u32,
    pub rectangle: Rectangle,
    pub signer: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    pub required: bool,
}

/// The wire form of a [`SignatureRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignatureRequestPayload<'a> {
    pub document_id: &'a str,
    pub signers: Vec<SignerPayload<'a>>,
    pub fields: Vec<FieldPayload<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    pub send_emails: bool,
}

impl SignatureRequest {
    /// Signers get their 1-based position as `order` and `"Signer N"` as a default role;
    /// fields are required unless they say otherwise.
    pub fn to_payload(&self) -> SignatureRequestPayload<'_> {
        let signers = self
            .signers
            .iter()
            .enumerate()
            .map(|(index, signer)| SignerPayload {
                email: &signer.email,
                name: signer.name.as_deref(),
                role: signer
                    .role
                    .clone()
                    .unwrap_or_else(|| format!("Signer {}", index + 1)),
                order: index as u32 + 1,
            })
            .collect();
        let fields = self
            .fields
            .iter()
            .map(|field| FieldPayload {
                field_type: field.field_type,
                page: field.page,
                rectangle: Rectangle {
                    x: field.x,
                    y: field.y,
                    width: field.width,
                    height: field.height,
                },
                signer: field.signer_id,
                label: field.label.as_deref(),
                required: field.required.unwrap_or(true),
            })
            .collect();
        SignatureRequestPayload {
            document_id: &self.document_id,
            signers,
            fields,
            subject: self.subject.as_deref(),
            message: self.message.as_deref(),
            send_emails: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Hand-written so the API key never ends up in logs.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case("authorization") {
                    (k.as_str(), "<redacted>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(|b| b.len()))
            .finish()
    }
}

/// Something that can carry an [`ApiRequest`] to the service and return `(status, body)`.
pub trait Transport {
    fn send(
        &mut self,
        request: &ApiRequest,
    ) -> std::result::Result<(u16, Vec<u8>), Box<dyn StdError + Send + Sync>>;
}

/// A request together with the decoder for its response.
pub struct ApiCall<T> {
    pub request: ApiRequest,
    decoder: fn(u16, &[u8]) -> Result<T>,
}

impl<T> ApiCall<T> {
    pub fn decode(&self, status: u16, body: &[u8]) -> Result<T> {
        (self.decoder)(status, body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn error_body(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

fn decode_json<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    if !is_success(status) {
        log::debug!("DigiSigner responded with status {}", status);
        return Err(ApiError::Status {
            status,
            body: error_body(body),
        });
    }
    Ok(serde_json::from_slice(body)?)
}

fn decode_upload(status: u16, body: &[u8]) -> Result<Document> {
    if !is_success(status) {
        log::debug!("DigiSigner upload responded with status {}", status);
        return Err(ApiError::Upload {
            status,
            body: error_body(body),
        });
    }
    Ok(serde_json::from_slice(body)?)
}

fn decode_bytes(status: u16, body: &[u8]) -> Result<Vec<u8>> {
    if !is_success(status) {
        log::debug!("DigiSigner download responded with status {}", status);
        return Err(ApiError::Status {
            status,
            body: error_body(body),
        });
    }
    Ok(body.to_vec())
}

fn decode_empty(status: u16, body: &[u8]) -> Result<()> {
    if !is_success(status) {
        log::debug!("DigiSigner delete responded with status {}", status);
        return Err(ApiError::Status {
            status,
            body: error_body(body),
        });
    }
    Ok(())
}

/// Form-submission escaping for a `Content-Disposition` filename: the quote and line breaks are
/// percent-encoded so the value cannot close the parameter or start another header.
fn escape_disposition_filename(filename: &str) -> String {
    let mut out = String::with_capacity(filename.len());
    for c in filename.chars() {
        match c {
            '"' => out.push_str("%22"),
            '\r' => out.push_str("%0D"),
            '\n' => out.push_str("%0A"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode an id so it stays exactly one path segment.
fn encode_path_segment(segment: &str) -> String {
    if segment == "." || segment == ".." {
        return segment.replace('.', "%2E");
    }
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn decode_fields(status: u16, body: &[u8]) -> Result<Vec<DocumentField>> {
    let fields: DocumentFields = decode_json(status, body)?;
    Ok(fields.document_fields)
}

pub struct DigiSigner {
    api_key: String,
    base_url: String,
}

impl fmt::Debug for DigiSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigiSigner")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DigiSigner {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DIGISIGNER_API_URL)
    }

    /// Point the client at another deployment (e.g. a local stub).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        Ok(Self {
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn request(&self, method: Method, endpoint: &str, body: Option<Vec<u8>>) -> ApiRequest {
        let mut headers = vec![(
            "Authorization".to_owned(),
            format!("Token {}", self.api_key),
        )];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body,
        };
        log::trace!("built {:?}", request);
        request
    }

    pub fn upload_document(&self, pdf: &[u8], filename: &str) -> ApiCall<Document> {
        let boundary = format!("----seqkit{:016x}", randutil::from_time().rand_u64());
        self.upload_document_with_boundary(pdf, filename, &boundary)
    }

    fn upload_document_with_boundary(
        &self,
        pdf: &[u8],
        filename: &str,
        boundary: &str,
    ) -> ApiCall<Document> {
        let escaped = escape_disposition_filename(filename);
        let mut body = Vec::with_capacity(pdf.len() + 256);
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                escaped
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
        body.extend_from_slice(pdf);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        let request = ApiRequest {
            method: Method::Post,
            url: format!("{}/documents", self.base_url),
            headers: vec![
                ("Authorization".to_owned(), format!("Token {}", self.api_key)),
                (
                    "Content-Type".to_owned(),
                    format!("multipart/form-data; boundary={}", boundary),
                ),
            ],
            body: Some(body),
        };
        log::trace!("built {:?}", request);
        ApiCall {
            request,
            decoder: decode_upload,
        }
    }

    /// The document's current PDF bytes.
    pub fn download_document(&self, document_id: &str) -> ApiCall<Vec<u8>> {
        ApiCall {
            request: self.request(
                Method::Get,
                &format!("/documents/{}", encode_path_segment(document_id)),
                None,
            ),
            decoder: decode_bytes,
        }
    }

    pub fn send_signature_request(
        &self,
        request: &SignatureRequest,
    ) -> Result<ApiCall<Signature>> {
        let body = serde_json::to_vec(&request.to_payload())?;
        Ok(ApiCall {
            request: self.request(Method::Post, "/signature_requests", Some(body)),
            decoder: decode_json::<Signature>,
        })
    }

    pub fn get_signature_status(&self, signature_request_id: &str) -> ApiCall<SignatureStatus> {
        ApiCall {
            request: self.request(
                Method::Get,
                &format!(
                    "/signature_requests/{}",
                    encode_path_segment(signature_request_id)
                ),
                None,
            ),
            decoder: decode_json::<SignatureStatus>,
        }
    }

    pub fn list_fields(&self, document_id: &str) -> ApiCall<Vec<DocumentField>> {
        ApiCall {
            request: self.request(
                Method::Get,
                &format!("/documents/{}/fields", encode_path_segment(document_id)),
                None,
            ),
            decoder: decode_fields,
        }
    }

    pub fn delete_document(&self, document_id: &str) -> ApiCall<()> {
        ApiCall {
            request: self.request(
                Method::Delete,
                &format!("/documents/{}", encode_path_segment(document_id)),
                None,
            ),
            decoder: decode_empty,
        }
    }

    /// Send `call` through `transport` and decode the response.
    pub fn execute<T, X: Transport + ?Sized>(
        &self,
        transport: &mut X,
        call: ApiCall<T>,
    ) -> Result<T> {
        let (status, body) = transport
            .send(&call.request)
            .map_err(ApiError::Transport)?;
        call.decode(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    struct Canned {
        status: u16,
        body: Vec<u8>,
        seen: Vec<ApiRequest>,
    }

    impl Transport for Canned {
        fn send(
            &mut self,
            request: &ApiRequest,
        ) -> std::result::Result<(u16, Vec<u8>), Box<dyn StdError + Send + Sync>> {
            self.seen.push(request.clone());
            Ok((self.status, self.body.clone()))
        }
    }

    struct Broken;
    impl Transport for Broken {
        fn send(
            &mut self,
            _request: &ApiRequest,
        ) -> std::result::Result<(u16, Vec<u8>), Box<dyn StdError + Send + Sync>> {
            Err("connection refused".into())
        }
    }

    fn client() -> DigiSigner {
        DigiSigner::new("test-api-key").unwrap()
    }

    fn sample_request() -> SignatureRequest {
        SignatureRequest {
            document_id: "doc-1".to_owned(),
            signers: vec![
                Signer {
                    email: "a@example.com".to_owned(),
                    name: Some("Ann".to_owned()),
                    role: None,
                },
                Signer {
                    email: "b@example.com".to_owned(),
                    name: None,
                    role: Some("Witness".to_owned()),
                },
            ],
            fields: vec![Field {
                field_type: FieldType::Signature,
                page: 0,
                x: 10.0,
                y: 20.0,
                width: 100.0,
                height: 30.0,
                signer_id: 1,
                label: None,
                required: None,
            }],
            subject: Some("Please sign".to_owned()),
            message: None,
        }
    }

    #[test]
    fn test_requires_api_key() {
        let err = DigiSigner::new("").unwrap_err();
        assert_eq!("DigiSigner API key is required", err.to_string());
        assert!(DigiSigner::new("   ").is_err());
        assert!(DigiSigner::new("test-api-key").is_ok());
    }

    #[test]
    fn test_payload_defaults() {
        let req = sample_request();
        let payload = serde_json::to_value(req.to_payload()).unwrap();
        assert_eq!(
            json!({
                "document_id": "doc-1",
                "signers": [
                    {"email": "a@example.com", "name": "Ann", "role": "Signer 1", "order": 1},
                    {"email": "b@example.com", "role": "Witness", "order": 2}
                ],
                "fields": [{
                    "type": "signature",
                    "page": 0,
                    "rectangle": {"x": 10.0, "y": 20.0, "width": 100.0, "height": 30.0},
                    "signer": 1,
                    "required": true
                }],
                "subject": "Please sign",
                "send_emails": true
            }),
            payload
        );
    }

    #[test]
    fn test_send_signature_request() {
        let call = client().send_signature_request(&sample_request()).unwrap();
        assert_eq!(Method::Post, call.request.method);
        assert_eq!(
            "https://api.digisigner.com/v1/signature_requests",
            call.request.url
        );
        assert_eq!(Some("Token test-api-key"), call.request.header("authorization"));
        assert_eq!(Some("application/json"), call.request.header("Content-Type"));
        let sent: Value = serde_json::from_slice(call.request.body.as_ref().unwrap()).unwrap();
        assert_eq!(json!("doc-1"), sent["document_id"]);

        let response = br#"{"signature_request_id": "sr-9", "signing_urls": {"a@example.com": "https://sign/1"}, "status": "sent"}"#;
        let signature = call.decode(200, response).unwrap();
        assert_eq!("sr-9", signature.signature_request_id);
        assert_eq!(
            Some(&"https://sign/1".to_owned()),
            signature.signing_urls.get("a@example.com")
        );
    }

    #[test]
    fn test_status_error() {
        let call = client().get_signature_status("sr-9");
        assert_eq!(Method::Get, call.request.method);
        assert!(call.request.url.ends_with("/signature_requests/sr-9"));
        assert_eq!(None, call.request.header("Content-Type"));
        match call.decode(404, b"not found") {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(404, status);
                assert_eq!("not found", body);
            }
            other => panic!("expected status error, got {:?}", other.map(|_| ())),
        }
        let err = call.decode(500, b"boom").unwrap_err();
        assert_eq!("DigiSigner API error: 500 boom", err.to_string());
    }

    #[test]
    fn test_signature_status_optional_url() {
        let call = client().get_signature_status("sr-9");
        let status = call.decode(200, br#"{"status": "pending"}"#).unwrap();
        assert_eq!(None, status.signed_document_url);
        assert!(matches!(call.decode(200, b"{"), Err(ApiError::Json(_))));
    }

    #[test]
    fn test_upload_multipart() {
        let call = client().upload_document_with_boundary(b"%PDF-1.4", "contract.pdf", "XYZ");
        assert_eq!(Method::Post, call.request.method);
        assert_eq!("https://api.digisigner.com/v1/documents", call.request.url);
        assert_eq!(
            Some("multipart/form-data; boundary=XYZ"),
            call.request.header("content-type")
        );
        let body = String::from_utf8(call.request.body.clone().unwrap()).unwrap();
        assert!(body.starts_with("--XYZ\r\n"));
        assert!(body.contains("name=\"file\"; filename=\"contract.pdf\""));
        assert!(body.contains("Content-Type: application/pdf\r\n\r\n%PDF-1.4\r\n"));
        assert!(body.ends_with("--XYZ--\r\n"));

        let doc = call
            .decode(200, br#"{"document_id": "d-1", "name": "contract.pdf"}"#)
            .unwrap();
        assert_eq!("d-1", doc.document_id);
        let err = call.decode(413, b"too large").unwrap_err();
        assert_eq!("DigiSigner upload error: 413 too large", err.to_string());
    }

    #[test]
    fn test_upload_filename_cannot_add_headers() {
        let call = client().upload_document_with_boundary(
            b"%PDF",
            "a.pdf\"\r\nX-Injected: yes\r\n",
            "XYZ",
        );
        let body = String::from_utf8(call.request.body.unwrap()).unwrap();
        assert!(!body.contains("\r\nX-Injected"));
        assert!(body.contains("filename=\"a.pdf%22%0D%0AX-Injected: yes%0D%0A\"\r\n"));
        // one disposition line, then the part's content type
        let headers: Vec<&str> = body.split("\r\n\r\n").next().unwrap().split("\r\n").collect();
        assert_eq!(3, headers.len());
        assert_eq!("Content-Type: application/pdf", headers[2]);
    }

    #[test]
    fn test_ids_stay_in_one_path_segment() {
        let signer = client();
        assert_eq!(
            "https://api.digisigner.com/v1/documents/a%2Fb%3Fx%3D1",
            signer.download_document("a/b?x=1").request.url
        );
        assert_eq!(
            "https://api.digisigner.com/v1/documents/..%2Fsignature_requests/fields",
            signer.list_fields("../signature_requests").request.url
        );
        assert_eq!(
            "https://api.digisigner.com/v1/documents/%2E%2E",
            signer.delete_document("..").request.url
        );
        assert_eq!(
            "https://api.digisigner.com/v1/signature_requests/sr%20%231",
            signer.get_signature_status("sr #1").request.url
        );
        assert_eq!(
            "https://api.digisigner.com/v1/documents/d-1_v2.pdf~",
            signer.download_document("d-1_v2.pdf~").request.url
        );
    }

    #[test]
    fn test_upload_random_boundary() {
        let call = client().upload_document(b"pdf", "a.pdf");
        let content_type = call.request.header("Content-Type").unwrap().to_owned();
        let boundary = content_type.trim_start_matches("multipart/form-data; boundary=");
        let body = call.request.body.unwrap();
        assert!(body.starts_with(format!("--{}\r\n", boundary).as_bytes()));
    }

    #[test]
    fn test_download_and_delete() {
        let signer = client();
        let call = signer.download_document("d-1");
        assert!(call.request.url.ends_with("/documents/d-1"));
        assert_eq!(vec![1u8, 2, 3], call.decode(200, &[1, 2, 3]).unwrap());

        let call = signer.delete_document("d-1");
        assert_eq!(Method::Delete, call.request.method);
        assert!(call.decode(204, b"").is_ok());
        assert!(call.decode(403, b"").is_err());
    }

    #[test]
    fn test_list_fields_through_transport() {
        let mut transport = Canned {
            status: 200,
            body: br#"{"document_fields": [
                {"api_id": "f1", "type": "SIGNATURE", "page": 0, "rectangle": [1, 2, 3, 4], "role": "Signer 1", "status": "SIGNED"},
                {"api_id": "f2", "type": "TEXT", "page": 1}
            ]}"#
            .to_vec(),
            seen: Vec::new(),
        };
        let signer = client();
        let fields = signer
            .execute(&mut transport, signer.list_fields("d-1"))
            .unwrap();
        assert_eq!(2, fields.len());
        assert_eq!("f1", fields[0].api_id);
        assert_eq!(vec![1.0, 2.0, 3.0, 4.0], fields[0].rectangle);
        assert_eq!(None, fields[1].role);
        assert_eq!(1, transport.seen.len());
        assert!(transport.seen[0].url.ends_with("/documents/d-1/fields"));
    }

    #[test]
    fn test_transport_failure() {
        let signer = client();
        let err = signer
            .execute(&mut Broken, signer.delete_document("d-1"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let call = client().get_signature_status("sr-1");
        let printed = format!("{:?} {:?}", call.request, client());
        assert!(!printed.contains("test-api-key"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_request_input_accepts_camel_case_id() {
        let req: SignatureRequest = serde_json::from_value(json!({
            "documentId": "doc-7",
            "signers": [{"email": "x@example.com"}],
            "fields": [{"type": "checkbox", "page": 2, "x": 1, "y": 2, "width": 3, "height": 4, "signer_id": 1, "required": false}]
        }))
        .unwrap();
        assert_eq!("doc-7", req.document_id);
        assert_eq!(FieldType::Checkbox, req.fields[0].field_type);
        assert!(!req.to_payload().fields[0].required);
    }
}
