//! Lambda entry point: API Gateway proxy events in, proxy responses out.

use std::sync::Arc;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::{debug, info};

use crate::handlers::UserHandler;
use crate::models::GatewayRequest;

/// Serve invocations until the runtime stops delivering them.
pub async fn run(handler: Arc<UserHandler>) -> Result<(), Error> {
    info!("Waiting for Lambda invocations");
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| {
            let handler = Arc::clone(&handler);
            async move {
                debug!("Invocation {}", event.context.request_id);
                Ok::<_, Error>(handle_proxy(&handler, event.payload).await)
            }
        },
    ))
    .await
}

/// Run one proxy event through the handler.
pub async fn handle_proxy(
    handler: &UserHandler,
    request: ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    handler.handle(GatewayRequest::from(request)).await.into()
}
