use crate::randutil::{self, RandomSource};
use crate::sampling::{checked_count, SampleError, SampleOptions, SampleResult, SequenceSampler};
use serde_json::Value;
use std::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickRequest {
    pub items: Vec<Value>,
    /// Absent means a single pick; negative counts are rejected.
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub options: SampleOptions,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuffleRequest {
    pub items: Vec<Value>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum JsonRequest {
    Pick(PickRequest),
    Shuffle(ShuffleRequest),
}

/// This is what callers get back when anything goes wrong.
#[derive(Serialize, Deserialize)]
struct ErrorMessage {
    error: String,
    context: String,
}

pub fn do_pick<R: RandomSource + ?Sized>(
    request: &PickRequest,
    rand: &mut R,
) -> Result<SampleResult<Value>, SampleError> {
    let count = request.count.map(checked_count).transpose()?;
    let picked = request.items.sample(count, request.options, rand)?;
    Ok(picked.map(|v| v.clone()))
}

pub fn do_shuffle<R: RandomSource + ?Sized>(request: &ShuffleRequest, rand: &mut R) -> Vec<Value> {
    request.items.shuffled(rand).collect()
}

fn error_kind(e: &SampleError) -> &'static str {
    match e {
        SampleError::EmptyCollection => "empty_collection",
        SampleError::InsufficientElements { .. } => "insufficient_elements",
        SampleError::InvalidArgument { .. } => "invalid_argument",
    }
}

fn source_for(seed: Option<u64>) -> oorandom::Rand64 {
    match seed {
        Some(seed) => randutil::seeded(seed),
        None => randutil::from_time(),
    }
}

pub(crate) fn result_exec_json(query_str: &str) -> Result<String, Box<dyn Error>> {
    let request: JsonRequest = serde_json::from_str(query_str)?;
    let response = match request {
        JsonRequest::Pick(pick) => {
            let mut rand = source_for(pick.seed);
            match do_pick(&pick, &mut rand) {
                Ok(picked) => serde_json::to_string(&picked)?,
                Err(e) => serde_json::to_string(&ErrorMessage {
                    error: error_kind(&e).to_owned(),
                    context: e.to_string(),
                })?,
            }
        }
        JsonRequest::Shuffle(shuffle) => {
            let mut rand = source_for(shuffle.seed);
            serde_json::to_string(&do_shuffle(&shuffle, &mut rand))?
        }
    };
    Ok(response)
}

/// Run a JSON-encoded pick or shuffle request and return a JSON-encoded answer.
///
/// ```text
/// {"op": "pick", "items": [1, 2, 3], "count": 2, "options": {"repeat": false}, "seed": 7}
/// {"op": "shuffle", "items": ["a", "b", "c"]}
/// ```
pub fn exec_json(query_str: &str) -> String {
    match result_exec_json(query_str) {
        Ok(response) => response,
        Err(e) => {
            log::debug!("exec_json failed: {}", e);
            serde_json::to_string(&ErrorMessage {
                error: "error".to_string(),
                context: format!("{}", e),
            })
            .unwrap_or_else(|_| r#"{"error":"error","context":""}"#.to_owned())
        }
    }
}
