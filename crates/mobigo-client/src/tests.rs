//! Integration tests against an in-process axum stand-in for the backend.

use std::sync::{Arc, Mutex};

use axum::{
  Json, Router,
  extract::{Path, Query, State},
  http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
  response::{IntoResponse, Response},
  routing::{get, put},
};
use chrono::NaiveDate;
use mobigo_core::{
  Persisted,
  form::{AuthorityDraft, AuthorityForm},
  model::{
    Authority, BookingFields, Group, GroupFields, GroupMemberFields, NewRide, PaymentFields,
    People, PeopleFields, Ride, RideFields, UserRef,
  },
  status::RideStatus,
};
use serde_json::{Value, json};

use crate::{
  ApiClient, ApiConfig, Direction, Editor, Error, RequestOptions, Resolution, Search,
  options::{BookingOptions, GroupMemberOptions, PaymentOptions},
  resolve,
};

// ─── Fake backend ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Recorded {
  method:       &'static str,
  path:         String,
  query:        Vec<(String, String)>,
  content_type: Option<String>,
  body:         Option<Value>,
}

impl Recorded {
  fn new(method: &'static str, path: impl Into<String>) -> Self {
    Self {
      method,
      path: path.into(),
      query: Vec::new(),
      content_type: None,
      body: None,
    }
  }
}

#[derive(Default)]
struct Backend {
  log: Mutex<Vec<Recorded>>,
}

impl Backend {
  fn record(&self, request: Recorded) { self.log.lock().unwrap().push(request); }

  fn last(&self) -> Recorded {
    self.log.lock().unwrap().last().cloned().expect("a recorded request")
  }

  fn count(&self) -> usize { self.log.lock().unwrap().len() }
}

type Shared = Arc<Backend>;

fn ride_json(id: i64) -> Value {
  json!({
    "id": id,
    "villeDepart": "Douala",
    "villeArrivee": "Yaoundé",
    "dateDepart": "2025-05-19",
    "dateArrivee": null,
    "statut": "OUVERT",
  })
}

async fn list_rides(
  State(backend): State<Shared>,
  Query(query): Query<Vec<(String, String)>>,
) -> Json<Value> {
  backend.record(Recorded {
    query,
    ..Recorded::new("GET", "/api/rides")
  });
  Json(json!([ride_json(1408)]))
}

async fn create_ride(
  State(backend): State<Shared>,
  Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
  backend.record(Recorded {
    body: Some(body.clone()),
    ..Recorded::new("POST", "/api/rides")
  });
  let mut created = body;
  created["id"] = json!(100);
  (StatusCode::CREATED, Json(created))
}

async fn find_ride(State(backend): State<Shared>, Path(id): Path<i64>) -> Response {
  backend.record(Recorded::new("GET", format!("/api/rides/{id}")));
  if id == 1408 {
    Json(ride_json(id)).into_response()
  } else {
    StatusCode::NOT_FOUND.into_response()
  }
}

async fn update_ride(
  State(backend): State<Shared>,
  Path(id): Path<i64>,
  Json(body): Json<Value>,
) -> Response {
  backend.record(Recorded {
    body: Some(body.clone()),
    ..Recorded::new("PUT", format!("/api/rides/{id}"))
  });
  if id == 500 {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
  } else {
    Json(body).into_response()
  }
}

async fn patch_ride(
  State(backend): State<Shared>,
  Path(id): Path<i64>,
  headers: HeaderMap,
  body: String,
) -> Json<Value> {
  let content_type = headers
    .get(CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string);
  backend.record(Recorded {
    content_type,
    body: serde_json::from_str(&body).ok(),
    ..Recorded::new("PATCH", format!("/api/rides/{id}"))
  });
  Json(ride_json(id))
}

async fn delete_ride(State(backend): State<Shared>, Path(id): Path<i64>) -> StatusCode {
  backend.record(Recorded::new("DELETE", format!("/api/rides/{id}")));
  StatusCode::NO_CONTENT
}

async fn complete_ride(Path(id): Path<i64>) -> Json<Value> {
  let mut ride = ride_json(id);
  ride["statut"] = json!("EFFECTUE");
  Json(ride)
}

fn people_json() -> Value {
  json!([{ "id": 5, "nom": "Ngono", "dateNaissance": "1990-01-31" }])
}

async fn search_people(
  State(backend): State<Shared>,
  Query(query): Query<Vec<(String, String)>>,
) -> Json<Value> {
  backend.record(Recorded {
    query,
    ..Recorded::new("GET", "/api/people/_search")
  });
  Json(people_json())
}

async fn create_authority(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
  (StatusCode::CREATED, Json(body))
}

async fn find_authority(State(backend): State<Shared>, Path(name): Path<String>) -> Response {
  backend.record(Recorded::new("GET", format!("/api/authorities/{name}")));
  if name == "ROLE_ADMIN" || name == "ROLE_A/B" {
    Json(json!({ "name": name, "description": "administrators" })).into_response()
  } else {
    StatusCode::NOT_FOUND.into_response()
  }
}

async fn update_authority(
  State(backend): State<Shared>,
  Path(name): Path<String>,
  Json(body): Json<Value>,
) -> Json<Value> {
  backend.record(Recorded {
    body: Some(body.clone()),
    ..Recorded::new("PUT", format!("/api/authorities/{name}"))
  });
  Json(body)
}

async fn list_bookings(
  State(backend): State<Shared>,
  Query(query): Query<Vec<(String, String)>>,
) -> Json<Value> {
  backend.record(Recorded {
    query,
    ..Recorded::new("GET", "/api/bookings")
  });
  Json(json!([{ "id": 21, "dateReservation": "2025-05-18" }]))
}

fn router(backend: Shared) -> Router {
  Router::new()
    .route("/api/rides", get(list_rides).post(create_ride))
    .route(
      "/api/rides/_search",
      get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    )
    .route(
      "/api/rides/{id}",
      get(find_ride)
        .put(update_ride)
        .patch(patch_ride)
        .delete(delete_ride),
    )
    .route("/api/rides/{id}/complete", put(complete_ride))
    .route("/api/people", get(|| async { Json(people_json()) }))
    .route("/api/people/_search", get(search_people))
    .route("/api/groups", get(|| async { Json(Value::Null) }))
    .route(
      "/api/authorities",
      get(|| async { Json(json!([{ "name": "ROLE_USER" }])) }).post(create_authority),
    )
    .route("/api/authorities/{name}", get(find_authority).put(update_authority))
    .route("/api/bookings", get(list_bookings))
    .route(
      "/api/users",
      get(|| async { Json(json!([{ "id": 3, "login": "admin" }])) }),
    )
    .with_state(backend)
}

async fn spawn() -> (ApiClient, Shared) {
  let backend = Shared::default();
  let app = router(backend.clone());
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
    .await
    .expect("bind ephemeral port");
  let address = listener.local_addr().expect("local address");
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("serve fake backend");
  });

  let client = ApiClient::new(ApiConfig {
    base_url: format!("http://{address}"),
    ..Default::default()
  })
  .expect("client");
  (client, backend)
}

fn may(day: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2025, 5, day).unwrap() }

fn valid_ride_fields() -> RideFields {
  RideFields {
    ville_depart: Some("Douala".into()),
    ville_arrivee: Some("Kribi".into()),
    date_depart: Some(may(19)),
    date_arrivee: Some(may(19)),
    heure_depart: Some("08".into()),
    heure_arrivee: Some("11".into()),
    minute_depart: Some("00".into()),
    minute_arrivee: Some("30".into()),
    prix_par_place: Some(4000.0),
    nbre_place_disponible: Some(3),
    statut: Some(RideStatus::Ouvert),
    vehicule: None,
  }
}

// ─── Entity service ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_sends_text_dates_and_decodes_reply() {
  let (client, backend) = spawn().await;
  let ride = NewRide::new(RideFields {
    date_depart: Some(may(19)),
    ..Default::default()
  });

  let created = client.service::<RideFields>().create(&ride).await.unwrap();

  let sent = backend.last();
  assert_eq!(sent.method, "POST");
  let body = sent.body.unwrap();
  assert_eq!(body["id"], Value::Null);
  assert_eq!(body["dateDepart"], json!("2025-05-19"));
  assert_eq!(body["dateArrivee"], Value::Null);

  assert_eq!(created.id(), 100);
  assert_eq!(created.fields.date_depart, Some(may(19)));
  assert_eq!(created.fields.date_arrivee, None);
}

#[tokio::test]
async fn update_puts_to_the_item_path() {
  let (client, backend) = spawn().await;
  let ride = Ride::new(7, valid_ride_fields());

  let updated = client.service::<RideFields>().update(&ride).await.unwrap();

  let sent = backend.last();
  assert_eq!((sent.method, sent.path.as_str()), ("PUT", "/api/rides/7"));
  assert_eq!(sent.body.unwrap()["id"], json!(7));
  assert_eq!(updated, ride);
}

#[tokio::test]
async fn partial_update_sends_merge_patch_without_nulls() {
  let (client, backend) = spawn().await;
  let patch = Ride::new(9, RideFields {
    ville_arrivee: Some("Limbe".into()),
    ..Default::default()
  });

  client
    .service::<RideFields>()
    .partial_update(&patch)
    .await
    .unwrap();

  let sent = backend.last();
  assert_eq!(sent.method, "PATCH");
  assert_eq!(sent.content_type.as_deref(), Some("application/merge-patch+json"));
  assert_eq!(sent.body, Some(json!({ "id": 9, "villeArrivee": "Limbe" })));
}

#[tokio::test]
async fn find_decodes_or_reports_missing() {
  let (client, _backend) = spawn().await;
  let rides = client.service::<RideFields>();

  let ride = rides.find(1408).await.unwrap().expect("ride 1408");
  assert_eq!(ride.fields.date_depart, Some(may(19)));
  assert_eq!(ride.fields.statut, Some(RideStatus::Ouvert));

  assert!(rides.find(1).await.unwrap().is_none());
}

#[tokio::test]
async fn query_sends_paging_and_repeated_sort() {
  let (client, backend) = spawn().await;
  let options = RequestOptions::new()
    .page(0)
    .size(20)
    .sort_by("id", Direction::Asc)
    .sort_by("dateDepart", Direction::Desc);

  let rides = client.service::<RideFields>().query(&options).await.unwrap();

  assert_eq!(rides.len(), 1);
  assert_eq!(backend.last().query, options.to_query());
}

#[tokio::test]
async fn query_null_body_reads_as_empty() {
  let (client, _backend) = spawn().await;
  let groups = client
    .service::<GroupFields>()
    .query(&RequestOptions::default())
    .await
    .unwrap();
  assert!(groups.is_empty());
}

#[tokio::test]
async fn delete_hits_the_item_path() {
  let (client, backend) = spawn().await;
  client.service::<RideFields>().delete(31).await.unwrap();
  let sent = backend.last();
  assert_eq!((sent.method, sent.path.as_str()), ("DELETE", "/api/rides/31"));
}

#[tokio::test]
async fn failed_search_reads_as_no_results() {
  let (client, _backend) = spawn().await;
  let found = client
    .service::<RideFields>()
    .search(&Search::new("douala"))
    .await
    .unwrap();
  assert!(found.is_empty());
}

#[tokio::test]
async fn search_sends_query_and_decodes_dates() {
  let (client, backend) = spawn().await;
  let found = client
    .service::<PeopleFields>()
    .search(&Search::new("ngono").with_options(RequestOptions::new().size(5)))
    .await
    .unwrap();

  assert_eq!(found.len(), 1);
  assert_eq!(found[0].fields.date_naissance, NaiveDate::from_ymd_opt(1990, 1, 31));
  let query = backend.last().query;
  assert!(query.contains(&("query".to_string(), "ngono".to_string())));
  assert!(query.contains(&("size".to_string(), "5".to_string())));
}

#[tokio::test]
async fn unsearchable_resource_is_refused_without_a_request() {
  let (client, backend) = spawn().await;
  let result = client
    .service::<GroupFields>()
    .search(&Search::new("x"))
    .await;
  assert!(matches!(result, Err(Error::NotSearchable("group"))));
  assert_eq!(backend.count(), 0);
}

#[tokio::test]
async fn completing_a_ride_returns_its_new_status() {
  let (client, _backend) = spawn().await;
  let ride = client.service::<RideFields>().complete(12).await.unwrap();
  assert_eq!(ride.id(), 12);
  assert_eq!(ride.fields.statut, Some(RideStatus::Effectue));
}

// ─── Resolver ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn resolver_distinguishes_create_found_and_missing() {
  let (client, backend) = spawn().await;
  let rides = client.service::<RideFields>();

  assert_eq!(resolve(&rides, None).await.unwrap(), Resolution::Create);
  assert_eq!(resolve(&rides, Some("")).await.unwrap(), Resolution::Create);
  assert_eq!(resolve(&rides, Some("abc")).await.unwrap(), Resolution::NotFound);
  assert_eq!(backend.count(), 0);

  let found = resolve(&rides, Some("1408")).await.unwrap().found();
  assert_eq!(found.map(|r| r.id()), Some(1408));
  assert_eq!(resolve(&rides, Some("9")).await.unwrap(), Resolution::NotFound);
}

#[tokio::test]
async fn authority_resolver_and_create() {
  let (client, _backend) = spawn().await;
  let authorities = client.authorities();

  assert_eq!(authorities.resolve(None).await.unwrap(), Resolution::Create);
  assert_eq!(
    authorities.resolve(Some("ROLE_NOBODY")).await.unwrap(),
    Resolution::NotFound
  );
  let admin = authorities.resolve(Some("ROLE_ADMIN")).await.unwrap().found().unwrap();
  assert_eq!(admin.description.as_deref(), Some("administrators"));

  let created = authorities
    .create(&Authority {
      name:        "ROLE_DRIVER".into(),
      description: None,
      ordre:       Some("3".into()),
    })
    .await
    .unwrap();
  assert_eq!(created.name, "ROLE_DRIVER");
}

// ─── Editor ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn saving_a_new_record_creates_it_and_adopts_the_key() {
  let (client, backend) = spawn().await;
  let rides = client.service::<RideFields>();
  let mut editor = Editor::open(resolve(&rides, None).await.unwrap()).unwrap();
  *editor.form.fields_mut() = valid_ride_fields();

  let saved = editor.save(&rides).await.unwrap();

  assert_eq!(backend.last().method, "POST");
  assert_eq!(saved.id(), 100);
  assert_eq!(editor.form.id(), Some(100));
  assert!(!editor.is_saving());
}

#[tokio::test]
async fn invalid_form_is_not_sent() {
  let (client, backend) = spawn().await;
  let rides = client.service::<RideFields>();
  let mut editor = Editor::<RideFields>::new();

  let result = editor.save(&rides).await;

  assert!(matches!(result, Err(Error::Validation(ref errors)) if errors.len() == 11));
  assert_eq!(backend.count(), 0);
}

#[tokio::test]
async fn failed_update_clears_saving_and_keeps_the_form() {
  let (client, _backend) = spawn().await;
  let rides = client.service::<RideFields>();
  let mut editor = Editor::open(Resolution::Found(Ride::new(500, valid_ride_fields()))).unwrap();

  let result = editor.save(&rides).await;

  assert!(matches!(
    result,
    Err(Error::Status { status, .. }) if status == StatusCode::INTERNAL_SERVER_ERROR
  ));
  assert!(!editor.is_saving());
  assert_eq!(editor.form.id(), Some(500));
  assert_eq!(editor.form.fields(), &valid_ride_fields());
}

#[test]
fn editor_for_missing_record_does_not_open() {
  assert!(Editor::<RideFields>::open(Resolution::NotFound).is_none());
}

// ─── Relationship options ────────────────────────────────────────────────────

#[tokio::test]
async fn booking_options_include_the_current_references() {
  let (client, _backend) = spawn().await;
  let booking = BookingFields {
    trajet: Some(Box::new(Ride::reference(4697))),
    passager: Some(Box::new(People::reference(5))),
    ..Default::default()
  };

  let options = BookingOptions::load(&client, &booking).await.unwrap();

  let ride_ids: Vec<_> = options.rides.iter().map(Persisted::id).collect();
  assert_eq!(ride_ids, vec![4697, 1408]);
  let people_ids: Vec<_> = options.people.iter().map(Persisted::id).collect();
  assert_eq!(people_ids, vec![5]);
  assert_eq!(options.people[0].fields.nom.as_deref(), Some("Ngono"));

  let unchanged = options.clone().include(&BookingFields::default());
  assert_eq!(unchanged, options);
}

#[tokio::test]
async fn authority_name_is_sent_as_a_single_segment() {
  let (client, backend) = spawn().await;
  let authorities = client.authorities();

  assert!(authorities.find("ROLE_NOBODY/../ROLE_ADMIN").await.unwrap().is_none());
  assert_eq!(backend.last().path, "/api/authorities/ROLE_NOBODY/../ROLE_ADMIN");

  assert!(authorities.find("ROLE_ADMIN#draft").await.unwrap().is_none());
  assert_eq!(backend.last().path, "/api/authorities/ROLE_ADMIN#draft");

  let slashed = authorities.find("ROLE_A/B").await.unwrap().expect("ROLE_A/B");
  assert_eq!(slashed.name, "ROLE_A/B");
}

#[tokio::test]
async fn dot_authority_names_are_refused_without_a_request() {
  let (client, backend) = spawn().await;
  let authorities = client.authorities();

  assert!(matches!(authorities.delete("..").await, Err(Error::InvalidKey(_))));
  assert_eq!(authorities.resolve(Some(".")).await.unwrap(), Resolution::NotFound);
  assert_eq!(backend.count(), 0);
}

#[tokio::test]
async fn edited_authority_is_saved_with_put() {
  let (client, backend) = spawn().await;
  let authorities = client.authorities();
  let admin = authorities.resolve(Some("ROLE_ADMIN")).await.unwrap().found().unwrap();

  let mut form = AuthorityForm::edit(admin);
  form.description = Some("back office".into());
  let draft = form.draft().unwrap();
  assert!(matches!(draft, AuthorityDraft::Update(_)));

  let saved = authorities.save(&draft).await.unwrap();

  let sent = backend.last();
  assert_eq!((sent.method, sent.path.as_str()), ("PUT", "/api/authorities/ROLE_ADMIN"));
  assert_eq!(sent.body.unwrap()["description"], json!("back office"));
  assert_eq!(saved.description.as_deref(), Some("back office"));
}

#[tokio::test]
async fn payment_options_only_offer_unpaid_bookings() {
  let (client, backend) = spawn().await;

  let options = PaymentOptions::load(&client, &PaymentFields::default()).await.unwrap();

  let sent = backend.last();
  assert_eq!(sent.path, "/api/bookings");
  assert_eq!(sent.query, vec![("filter".to_string(), "payement-is-null".to_string())]);
  assert_eq!(options.bookings.iter().map(Persisted::id).collect::<Vec<_>>(), vec![21]);
}

#[tokio::test]
async fn group_member_options_include_groups_and_users() {
  let (client, _backend) = spawn().await;
  let member = GroupMemberFields {
    group: Some(Box::new(Group::reference(7))),
    user:  Some(UserRef {
      id:    9,
      login: Some("driver".into()),
    }),
  };

  let options = GroupMemberOptions::load(&client, &member).await.unwrap();

  assert_eq!(options.groups.iter().map(Persisted::id).collect::<Vec<_>>(), vec![7]);
  let user_ids: Vec<_> = options.users.iter().map(|u| u.id).collect();
  assert_eq!(user_ids, vec![9, 3]);

  let switched = options.include(&GroupMemberFields {
    group: None,
    user:  Some(UserRef { id: 3, login: None }),
  });
  assert_eq!(switched.users.len(), 2);
  assert_eq!(switched.users[1].login.as_deref(), Some("admin"));
}
