use crate::http::{status_reason, Response};

/// Write a pipeline [`Response`] to the raw `may_minihttp` response.
///
/// `may_minihttp` wants `'static` header strings, so each header line is
/// leaked for the lifetime of the connection write.
pub fn write_response(out: &mut may_minihttp::Response, response: &Response) {
    out.status_code(response.status() as usize, status_reason(response.status()));
    for (name, value) in response.headers() {
        let header = format!("{name}: {value}").into_boxed_str();
        out.header(Box::leak(header));
    }
    out.body_vec(response.body().as_bytes().to_vec());
}
