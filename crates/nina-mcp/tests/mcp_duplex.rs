//! End-to-end MCP protocol tests over in-memory duplex pipes.
//!
//! A real rmcp client connects to the gateway server and exercises the two
//! protocol operations: listing the catalog and calling tools through to a
//! mock upstream API.

use std::time::Duration;

use rmcp::{
    model::{CallToolRequestParam, ClientInfo, Implementation},
    ServiceExt,
};
use serde_json::{json, Map, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nina_mcp::{NinaGateway, NinaMcpServer};

/// Spin up the server on one end of a duplex pipe and connect a client to
/// the other end.
async fn connect(
    gateway: NinaGateway,
) -> rmcp::service::RunningService<rmcp::RoleClient, ClientInfo> {
    let (client_read, server_write) = tokio::io::duplex(4096);
    let (server_read, client_write) = tokio::io::duplex(4096);

    let server = NinaMcpServer::new(gateway);
    let server_transport =
        rmcp::transport::async_rw::AsyncRwTransport::new(server_read, server_write);
    tokio::spawn(async move {
        if let Ok(service) = server.serve(server_transport).await {
            let _ = service.waiting().await;
        }
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    let client_transport =
        rmcp::transport::async_rw::AsyncRwTransport::new(client_read, client_write);
    let client_handler = ClientInfo {
        protocol_version: Default::default(),
        capabilities: Default::default(),
        client_info: Implementation {
            name: "nina-mcp-test-client".to_string(),
            version: "0.1.0".to_string(),
            ..Default::default()
        },
    };

    client_handler
        .serve(client_transport)
        .await
        .expect("client connects")
}

/// Pull the text content out of a call result, whatever rmcp wraps it in.
fn result_text(result: &rmcp::model::CallToolResult) -> String {
    let content = serde_json::to_value(&result.content).expect("content serializes");
    content[0]["text"]
        .as_str()
        .expect("first content item is text")
        .to_string()
}

#[tokio::test]
async fn client_sees_the_full_catalog() {
    let gateway =
        NinaGateway::with_base_url("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
    let client = connect(gateway).await;

    let tools = client.peer().list_all_tools().await.expect("list tools");
    assert_eq!(tools.len(), 89);

    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "nina_get_version",
        "nina_capture_image",
        "nina_slew_telescope",
        "nina_sequence_start",
        "nina_wait",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }

    let capture = tools
        .iter()
        .find(|t| t.name == "nina_capture_image")
        .unwrap();
    let schema = serde_json::to_value(&capture.input_schema).unwrap();
    assert_eq!(schema["properties"]["binning"]["default"], json!(1));
    assert_eq!(schema["required"], json!(["exposure_time"]));

    let _ = client.cancel().await;
}

#[tokio::test]
async fn call_routes_through_to_the_upstream_api() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/api/version"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Response": "2.3.0", "Success": true})),
        )
        .mount(&upstream)
        .await;

    let gateway =
        NinaGateway::with_base_url(format!("{}/v2/api", upstream.uri()), Duration::from_secs(2))
            .unwrap();
    let client = connect(gateway).await;

    let result = client
        .peer()
        .call_tool(CallToolRequestParam {
            name: "nina_get_version".into(),
            arguments: None,
        })
        .await
        .expect("call succeeds at the protocol level");

    assert!(result_text(&result).contains("2.3.0"));

    let _ = client.cancel().await;
}

#[tokio::test]
async fn unknown_tool_comes_back_as_error_text_not_protocol_failure() {
    let gateway =
        NinaGateway::with_base_url("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
    let client = connect(gateway).await;

    let mut arguments = Map::new();
    arguments.insert("anything".to_string(), Value::from(1));
    let result = client
        .peer()
        .call_tool(CallToolRequestParam {
            name: "unknown_tool_xyz".into(),
            arguments: Some(arguments),
        })
        .await
        .expect("protocol call still succeeds");

    assert_eq!(result_text(&result), "Error: Unknown tool unknown_tool_xyz");

    // The server keeps answering after a failed call.
    let tools = client.peer().list_all_tools().await.expect("list tools");
    assert_eq!(tools.len(), 89);

    let _ = client.cancel().await;
}
