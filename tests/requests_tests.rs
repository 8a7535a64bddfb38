use serde_json::{Value, json};
use transit_catalogue::{
    catalogue::TransportCatalogue,
    shared::geo::Distance,
    requests::{
        self, Answer, BaseRequest, StatQuery, StatResponse,
        json::{JsonReader, write_responses},
    },
};

fn document() -> Value {
    json!({
        "base_requests": [
            {
                "type": "Bus",
                "name": "114",
                "stops": ["Morskoy vokzal", "Rivierskiy most"],
                "is_roundtrip": false
            },
            {
                "type": "Stop",
                "name": "Rivierskiy most",
                "latitude": 43.587795,
                "longitude": 39.716901,
                "road_distances": {"Morskoy vokzal": 850}
            },
            {
                "type": "Stop",
                "name": "Morskoy vokzal",
                "latitude": 43.581969,
                "longitude": 39.719848,
                "road_distances": {"Rivierskiy most": 720}
            },
            {
                "type": "Bus",
                "name": "14",
                "stops": ["Morskoy vokzal", "Rivierskiy most", "Morskoy vokzal"],
                "is_roundtrip": true
            },
            {
                "type": "Stop",
                "name": "Elektroseti",
                "latitude": 43.598701,
                "longitude": 39.730623
            }
        ],
        "stat_requests": [
            {"id": 1, "type": "Stop", "name": "Rivierskiy most"},
            {"id": 2, "type": "Bus", "name": "114"},
            {"id": 3, "type": "Bus", "name": "14"},
            {"id": 4, "type": "Stop", "name": "Elektroseti"},
            {"id": 5, "type": "Bus", "name": "751"},
            {"id": 6, "type": "Stop", "name": "Samara"},
            {"id": 7, "type": "Map"}
        ]
    })
}

fn load() -> (TransportCatalogue, requests::json::Document) {
    let document = JsonReader::default()
        .parse(&document().to_string())
        .unwrap();
    let catalogue = TransportCatalogue::new().load_requests(&document.base_requests);
    (catalogue, document)
}

#[test]
fn parse_document_test() {
    let (_, document) = load();
    assert_eq!(document.base_requests.len(), 5);
    assert_eq!(document.stat_requests.len(), 7);
    match &document.base_requests[1] {
        BaseRequest::Stop(stop) => {
            assert_eq!(stop.name, "Rivierskiy most");
            assert_eq!(stop.road_distances.get("Morskoy vokzal"), Some(&850));
        }
        other => panic!("expected a stop, got {other:?}"),
    }
    match &document.base_requests[4] {
        BaseRequest::Stop(stop) => assert!(stop.road_distances.is_empty()),
        other => panic!("expected a stop, got {other:?}"),
    }
    assert_eq!(document.stat_requests[6].query(), None);
}

#[test]
fn buses_registered_before_their_stops_test() {
    let (catalogue, _) = load();
    assert_eq!(catalogue.stop_count(), 3);

    let info = catalogue.bus_info_by_name("114").unwrap();
    assert_eq!(info.stop_count, 3);
    assert_eq!(info.unique_stop_count, 2);
    assert_eq!(info.route_length.as_meters(), 1570.0);
    assert_eq!(info.missing_distances, 0);

    let info = catalogue.bus_info_by_name("14").unwrap();
    assert_eq!(info.stop_count, 3);
    assert_eq!(info.route_length.as_meters(), 1570.0);
}

#[test]
fn respond_all_test() {
    let (catalogue, document) = load();
    let responses = catalogue.respond_all(&document.stat_requests);
    assert_eq!(responses.len(), 7);

    assert_eq!(
        responses[0],
        StatResponse::Stop {
            request_id: 1,
            buses: vec!["114".to_string(), "14".to_string()],
        }
    );
    match &responses[1] {
        StatResponse::Bus {
            request_id,
            route_length,
            stop_count,
            unique_stop_count,
            curvature,
        } => {
            assert_eq!(*request_id, 2);
            assert_eq!(*route_length, 1570.0);
            assert_eq!(*stop_count, 3);
            assert_eq!(*unique_stop_count, 2);
            assert!(*curvature > 1.0);
        }
        other => panic!("expected bus statistics, got {other:?}"),
    }
    assert_eq!(
        responses[3],
        StatResponse::Stop {
            request_id: 4,
            buses: Vec::new(),
        }
    );
    for (index, id) in [(4, 5), (5, 6)] {
        assert_eq!(
            responses[index],
            StatResponse::Error {
                request_id: id,
                error_message: requests::NOT_FOUND.into(),
            }
        );
    }
    assert_eq!(responses[6], StatResponse::invalid(7));
}

#[test]
fn response_json_shape_test() {
    let (catalogue, document) = load();
    let responses = catalogue.respond_all(&document.stat_requests);
    let mut buffer = Vec::new();
    write_responses(&mut buffer, &responses).unwrap();
    let value: Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(
        value[0],
        json!({"request_id": 1, "buses": ["114", "14"]})
    );
    assert_eq!(value[1]["request_id"], json!(2));
    assert_eq!(value[1]["stop_count"], json!(3));
    assert_eq!(value[1]["route_length"], json!(1570.0));
    assert!(value[1]["curvature"].is_f64());
    assert_eq!(
        value[4],
        json!({"request_id": 5, "error_message": "not found"})
    );
}

#[test]
fn answer_distinguishes_unknown_stop_test() {
    let (catalogue, _) = load();
    let known = catalogue.answer(&StatQuery::Stop {
        name: "Elektroseti".into(),
    });
    assert_eq!(
        known,
        Answer::Stop {
            name: "Elektroseti".into(),
            buses: Some(Vec::new()),
        }
    );
    let unknown = catalogue.answer(&StatQuery::Stop {
        name: "Samara".into(),
    });
    assert_eq!(
        unknown,
        Answer::Stop {
            name: "Samara".into(),
            buses: None,
        }
    );
}

#[test]
fn missing_base_requests_test() {
    let result = JsonReader::default().parse(r#"{"stat_requests": []}"#);
    assert!(matches!(result, Err(requests::Error::MissingKey(key)) if key == "base_requests"));
}

#[test]
fn stat_requests_are_optional_test() {
    let document = JsonReader::default()
        .parse(r#"{"base_requests": []}"#)
        .unwrap();
    assert!(document.base_requests.is_empty());
    assert!(document.stat_requests.is_empty());
}

#[test]
fn custom_keys_test() {
    let config = requests::Config {
        base_requests_key: "load".into(),
        stat_requests_key: "ask".into(),
    };
    let input = r#"{
        "load": [{"type": "Stop", "name": "A", "latitude": 1.0, "longitude": 2.0}],
        "ask": [{"id": 9, "type": "Stop", "name": "A"}]
    }"#;
    let document = JsonReader::new(config).parse(input).unwrap();
    assert_eq!(document.base_requests.len(), 1);
    assert_eq!(document.stat_requests[0].id, 9);
}

#[test]
fn malformed_json_test() {
    let result = JsonReader::default().parse(r#"{"base_requests": [{"type": "Stop"}]}"#);
    assert!(matches!(result, Err(requests::Error::Json(_))));
}

#[test]
fn unknown_bus_stop_becomes_placeholder_test() {
    let input = r#"{
        "base_requests": [
            {"type": "Bus", "name": "1", "stops": ["Ghost", "Real"], "is_roundtrip": false},
            {"type": "Stop", "name": "Real", "latitude": 0.0, "longitude": 0.0}
        ]
    }"#;
    let document = JsonReader::default().parse(input).unwrap();
    let catalogue = TransportCatalogue::new().load_requests(&document.base_requests);
    let ghost = catalogue.stop_by_name("Ghost").unwrap();
    assert_eq!(ghost.coordinate, Default::default());
    assert_eq!(catalogue.buses_by_stop_name("Ghost"), vec!["1"]);
}

#[test]
fn unknown_road_distance_neighbour_becomes_placeholder_test() {
    let input = r#"{
        "base_requests": [
            {
                "type": "Stop",
                "name": "Real",
                "latitude": 43.58,
                "longitude": 39.71,
                "road_distances": {"Nowhere": 500}
            }
        ]
    }"#;
    let document = JsonReader::default().parse(input).unwrap();
    let catalogue = TransportCatalogue::new().load_requests(&document.base_requests);

    let real = catalogue.stop_by_name("Real").unwrap().index;
    let nowhere = catalogue.stop_by_name("Nowhere").unwrap();
    assert_eq!(nowhere.coordinate, Default::default());
    assert!(catalogue.buses_by_stop_name("Nowhere").is_empty());
    assert_eq!(
        catalogue.distance_between(real, nowhere.index),
        Some(Distance::from_meters(500.0))
    );
}

#[test]
fn read_document_from_reader_test() {
    let input = document().to_string();
    let document = JsonReader::default().read(input.as_bytes()).unwrap();
    assert_eq!(document.base_requests.len(), 5);
    assert_eq!(document.stat_requests.len(), 7);

    let result = JsonReader::default().read(&b"{\"base_requests\": ["[..]);
    assert!(matches!(result, Err(requests::Error::Json(_))));
}
