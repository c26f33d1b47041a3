mod common;

use axum::http::StatusCode;
use common::{send, test_app};
use premium_server::db::regions;
use premium_server::services::{LoadError, ReferenceDataStatus, RegionLoader};
use std::io::Write;

const FIXTURE: &str = "\
id,state_code,state,district,country,city,postcode,community,community_code,zone,latitude,longitude,accuracy,source,updated,notes
1,DE-BE,Berlin,Mitte,DE,Berlin,10115,Mitte,11000000,a,52.5323,13.3846,4,osm,2023,
2,DE-HB,Bremen,Bremen,DE,Bremen,28195,Mitte,04011000,a,53.0758,8.8072,4,osm,2023,
3,broken,row
4,DE-BY,Bayern,Oberbayern,DE,München,80331,Altstadt,09162000,a,48.1374,11.5755,4,osm,2023,
";

#[tokio::test]
async fn test_load_file_imports_valid_rows() {
    let (app, pool) = test_app(ReferenceDataStatus::Disabled).await;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let summary = RegionLoader::new(pool.clone(), 1000)
        .load_file(file.path())
        .await
        .unwrap();

    assert_eq!(summary.imported, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(regions::count_regions(&pool).await.unwrap(), 3);

    let (status, body) = send(&app, "GET", "/insurance/regions/80331", None).await;
    assert_eq!(status, StatusCode::OK);
    let found = body.as_array().expect("array");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["regionCode"], "DE-BY");
    assert_eq!(found[0]["regionName"], "Bayern");
    assert_eq!(found[0]["country"], "DE");
    assert_eq!(found[0]["city"], "München");
    assert_eq!(found[0]["postalCode"], "80331");
    assert_eq!(found[0]["location"]["latitude"], 48.1374);
    assert_eq!(found[0]["location"]["longitude"], 11.5755);
}

#[tokio::test]
async fn test_unknown_postal_code_is_not_found() {
    let (app, _) = test_app(ReferenceDataStatus::Disabled).await;

    let (status, body) = send(&app, "GET", "/insurance/regions/00000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let (_, pool) = test_app(ReferenceDataStatus::Disabled).await;
    let dir = tempfile::tempdir().unwrap();

    let result = RegionLoader::new(pool, 1000)
        .load_file(dir.path().join("missing.csv"))
        .await;

    assert!(matches!(result, Err(LoadError::Io { .. })));
    let status = ReferenceDataStatus::from(&result);
    assert!(!status.is_healthy());
}
