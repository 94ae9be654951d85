#[cfg(feature = "lambda")]
use cpf_function::adapters::gateway;
#[cfg(feature = "lambda")]
use cpf_function::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use cpf_function::{GatewayRequest, GatewayResponse, LambdaConfig, Validator};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    validator: &Validator,
    parameter: &str,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        path = event.payload.path.as_deref().unwrap_or("-"),
        "Handling CPF validation request"
    );

    Ok(gateway::handle(validator, &event.payload, parameter))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let validator = Validator::from_provider(&config);
    tracing::info!(
        parameter = %config.parameter,
        reject_repeated_digits = config.reject_repeated_digits,
        "CPF validation function ready"
    );

    let validator = &validator;
    let parameter = config.parameter.as_str();
    run(service_fn(move |event: LambdaEvent<GatewayRequest>| async move {
        function_handler(validator, parameter, event).await
    }))
    .await
}
