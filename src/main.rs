use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use takeoff_engine::chart::{ChartLimits, PA28_161};
use takeoff_engine::units::feet_to_meters;
use takeoff_engine::{TakeoffRequest, TakeoffResult};

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineRequest {
    Takeoff(TakeoffRequest),
    Limits,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineResponse {
    Takeoff {
        takeoff_distance_ft: f64,
        takeoff_distance_m: f64,
        liftoff_speed_kias: f64,
        barrier_speed_kias: f64,
    },
    Limits(ChartLimits),
    Error {
        message: String,
    },
}

impl From<TakeoffResult> for EngineResponse {
    fn from(result: TakeoffResult) -> Self {
        EngineResponse::Takeoff {
            takeoff_distance_ft: result.takeoff_distance_ft,
            takeoff_distance_m: feet_to_meters(result.takeoff_distance_ft),
            liftoff_speed_kias: result.liftoff_speed_kias,
            barrier_speed_kias: result.barrier_speed_kias,
        }
    }
}

fn respond(req: EngineRequest) -> EngineResponse {
    match req {
        EngineRequest::Takeoff(request) => match PA28_161.calculate(&request) {
            Ok(result) => {
                info!(
                    "takeoff {:?} -> {:.0} ft",
                    request, result.takeoff_distance_ft
                );
                EngineResponse::from(result)
            }
            Err(err) => {
                warn!("rejected takeoff request {:?}: {}", request, err);
                EngineResponse::Error {
                    message: err.to_string(),
                }
            }
        },
        EngineRequest::Limits => EngineResponse::Limits(PA28_161.limits()),
    }
}

async fn handler(event: LambdaEvent<EngineRequest>) -> Result<EngineResponse, Error> {
    Ok(respond(event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let func = service_fn(handler);
    lambda_runtime::run(func).await
}
