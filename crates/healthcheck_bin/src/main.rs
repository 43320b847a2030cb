use serde::Deserialize;

const PROXY_HEALTHCHECK_URL: &str = "http://localhost:3001/healthcheck";
const STATIC_HOST_URL: &str = "http://localhost:3000/";

#[derive(Debug)]
enum CustomError {
    ReqwestError(String),
    NotOk(&'static str),
}

#[derive(Debug, Deserialize)]
struct StatusJSON {
    status: String,
}

impl std::fmt::Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomError::ReqwestError(e) => write!(f, "Reqwest error: {}", e),
            CustomError::NotOk(service) => {
                write!(f, "{}: status code != 200 or no healthcheck", service)
            }
        }
    }
}

impl From<reqwest::Error> for CustomError {
    fn from(err: reqwest::Error) -> CustomError {
        CustomError::ReqwestError(err.to_string())
    }
}

fn check_proxy() -> Result<(), CustomError> {
    let res = reqwest::blocking::get(PROXY_HEALTHCHECK_URL)?;
    if res.status() != 200 {
        return Err(CustomError::NotOk("quote_proxy"));
    }
    let ok_str: StatusJSON = res.json::<StatusJSON>()?;
    if ok_str.status != "ok" {
        return Err(CustomError::NotOk("quote_proxy"));
    }
    Ok(())
}

fn check_static_host() -> Result<(), CustomError> {
    let res = reqwest::blocking::get(STATIC_HOST_URL)?;
    if res.status() != 200 {
        return Err(CustomError::NotOk("static_host"));
    }
    Ok(())
}

fn main() -> Result<(), CustomError> {
    check_proxy()?;
    check_static_host()
}
