//! Local stand-ins for the generation and storage services

use crate::config::ServiceEndpoint;
use axum::Router;

/// Serve `router` on an ephemeral localhost port for the rest of the test
pub(crate) async fn spawn_server(router: Router) -> ServiceEndpoint {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ServiceEndpoint::new("127.0.0.1", port)
}

/// An address nothing is listening on
pub(crate) fn unused_endpoint() -> ServiceEndpoint {
    let socket = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = socket.local_addr().unwrap().port();
    drop(socket);
    ServiceEndpoint::new("127.0.0.1", port)
}
