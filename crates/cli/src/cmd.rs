use callreq_types::CallRequest;
use eyre::{Result, WrapErr};
use std::{
    io::Read,
    path::{Path, PathBuf},
};

/// Reads a document from `path`, or from stdin if `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).wrap_err("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Decodes a single call request.
pub fn normalize(doc: &[u8]) -> Result<CallRequest> {
    CallRequest::decode(doc).wrap_err("failed to decode call request")
}

/// Merges the given documents, in order, into a single call request.
pub fn merge<'a>(docs: impl IntoIterator<Item = (&'a str, &'a [u8])>) -> Result<CallRequest> {
    let mut request = CallRequest::default();
    for (name, doc) in docs {
        debug!(name, "merging call request");
        request.merge_json(doc).wrap_err_with(|| format!("failed to merge {name}"))?;
    }
    Ok(request)
}

/// Encodes a call request for printing.
pub fn render(request: &CallRequest, pretty: bool) -> Result<String> {
    let value = request.to_json_value().wrap_err("failed to encode call request")?;
    let out =
        if pretty { serde_json::to_string_pretty(&value)? } else { serde_json::to_string(&value)? };
    Ok(out)
}

/// Runs `callreq normalize`.
pub fn run_normalize(path: Option<&Path>, pretty: bool) -> Result<String> {
    let doc = read_input(path)?;
    render(&normalize(&doc)?, pretty)
}

/// Runs `callreq merge`.
pub fn run_merge(paths: &[PathBuf], pretty: bool) -> Result<String> {
    let docs = paths
        .iter()
        .map(|path| Ok((path.display().to_string(), read_input(Some(path))?)))
        .collect::<Result<Vec<_>>>()?;
    let request = merge(docs.iter().map(|(name, doc)| (name.as_str(), doc.as_slice())))?;
    render(&request, pretty)
}
