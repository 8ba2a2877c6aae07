use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Permanently redirects `www.` hosts to the bare domain.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(location) = apex_location(&req) {
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|err| {
                tracing::error!(?err, "Failed to build redirect response");
                StatusCode::INTERNAL_SERVER_ERROR
            });
    }
    Ok(next.run(req).await)
}

fn apex_location(req: &Request<Body>) -> Option<String> {
    let host = req.headers().get(header::HOST)?.to_str().ok()?;
    let apex = host.strip_prefix("www.")?;
    let path_query = req.uri().path_and_query()?;
    Some(format!("https://{apex}{}", path_query.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(host: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::HOST, host)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_www_host_redirects_with_path() {
        let req = request("www.srl-group.example", "/project/solar?x=1");
        assert_eq!(
            apex_location(&req).as_deref(),
            Some("https://srl-group.example/project/solar?x=1")
        );
    }

    #[test]
    fn test_apex_host_passes_through() {
        let req = request("srl-group.example", "/");
        assert_eq!(apex_location(&req), None);
    }
}
