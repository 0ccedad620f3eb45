use staffetta_core::*;
use serde_json::{self as json, Value};

fn parse(json_str: &str) -> Value {
    json::from_str(json_str).expect("valid json")
}

/*
    Obiettivo test: verificare che un messaggio di testo venga serializzato "piatto":
    from, to, type = "text" e text allo stesso livello, senza campi media.
    Verificare anche che lo stesso JSON torni indietro nello stesso Message.
*/
#[test]
fn text_message_wire_shape() {
    let m = Message::text("alice", "team", "hi");
    let s = json::to_string(&m).expect("serialize");
    let v = parse(&s);

    assert_eq!(v, json::json!({"from": "alice", "to": "team", "type": "text", "text": "hi"}));

    let back: Message = json::from_str(&s).expect("deserialize");
    assert_eq!(back, m);
}

/*
    Obiettivo test: il destinatario "all" è riservato e diventa Target::All,
    qualsiasi altra stringa è un nome (client o gruppo).
*/
#[test]
fn broadcast_target_is_parsed_as_all() {
    let m: Message = json::from_str(r#"{"from":"x","to":"all","type":"text","text":"ping"}"#).expect("deserialize");
    assert_eq!(m.to, Target::All);

    let m: Message = json::from_str(r#"{"from":"x","to":"bob","type":"text","text":"ping"}"#).expect("deserialize");
    assert_eq!(m.to, Target::Named("bob".to_string()));
}

/*
    Obiettivo test: la variante video porta il riferimento al file e omette il testo se assente.
*/
#[test]
fn video_message_carries_reference() {
    let m = Message::video("alice", "bob", "/video/abc.mp4");
    let v = parse(&json::to_string(&m).expect("serialize"));

    assert_eq!(v["type"], "video");
    assert_eq!(v["video_url"], "/video/abc.mp4");
    assert!(v.get("text").is_none(), "text should be omitted when absent");
}

/*
    Obiettivo test: una SendRequest con media diventa la variante media (testo facoltativo),
    senza media diventa testo; il campo "type" della richiesta è il tipo del media.
*/
#[test]
fn send_request_selects_variant() {
    let req: SendRequest = json::from_str(
        r#"{"from":"alice","to":"bob","media":"aGVsbG8=","type":"image/png"}"#,
    )
    .expect("deserialize");
    let m = Message::try_from(req).expect("valid media message");
    assert_eq!(
        m.payload,
        Payload::Media { text: None, media: "aGVsbG8=".to_string(), media_type: Some("image/png".to_string()) }
    );

    let req: SendRequest = json::from_str(r#"{"from":"alice","to":"all","text":"hey"}"#).expect("deserialize");
    let m = Message::try_from(req).expect("valid text message");
    assert_eq!(m.to, Target::All);
    assert_eq!(m.payload, Payload::Text { text: "hey".to_string() });
}

/*
    Obiettivo test: campi mancanti o vuoti producono un Error strutturato che nomina il campo;
    un "type" senza media manca del media che dovrebbe descrivere.
*/
#[test]
fn send_request_missing_fields() {
    let cases = [
        (r#"{"to":"bob","text":"hi"}"#, "from"),
        (r#"{"from":"alice","text":"hi"}"#, "to"),
        (r#"{"from":"alice","to":"bob"}"#, "text"),
        (r#"{"from":"alice","to":"bob","text":"","media":""}"#, "text"),
        (r#"{"from":"alice","to":"bob","text":"hi","type":"image/png"}"#, "media"),
        (r#"{"from":"alice","to":"bob","text":"hi","media":"","type":"image/png"}"#, "media"),
    ];
    for (raw, field) in cases {
        let req: SendRequest = json::from_str(raw).expect("deserialize");
        let err = Message::try_from(req).expect_err("must be rejected");
        assert_eq!(err, Error::missing_field(field), "case {}", raw);
        assert_eq!(err.code, Error::INVALID_REQUEST);
    }
}

/*
    Obiettivo test: la porta accetta qualsiasi intero JSON, anche oltre i64 e u64, senza errori di parsing.
*/
#[test]
fn register_request_port_is_unbounded() {
    let reg: RegisterRequest =
        json::from_str(r#"{"id":"big","ip":"h","port":18446744073709551615}"#).expect("deserialize");
    assert_eq!(reg.port, Some(Port::from(u64::MAX)));

    let reg: RegisterRequest =
        json::from_str(r#"{"id":"bigger","ip":"h","port":100000000000000000000000}"#).expect("deserialize");
    assert!(reg.port.is_some());

    let reg: RegisterRequest = json::from_str(r#"{"id":"neg","ip":"h","port":-5}"#).expect("deserialize");
    assert_eq!(reg.port, Some(Port::from(-5)));
}

/*
    Obiettivo test: StatusResponse ok è solo {status: ok}; in errore porta il messaggio;
    dopo un upload porta video_url.
*/
#[test]
fn status_response_wire_shape() {
    let ok = parse(&json::to_string(&StatusResponse::ok()).expect("serialize"));
    assert_eq!(ok, json::json!({"status": "ok"}));

    let err = StatusResponse::from(Error::missing_field("id"));
    let v = parse(&json::to_string(&err).expect("serialize"));
    assert_eq!(v["status"], "error");
    assert_eq!(v["message"], "missing or empty field: id");

    let v = parse(&json::to_string(&StatusResponse::with_video_url("/video/x.mp4")).expect("serialize"));
    assert_eq!(v, json::json!({"status": "ok", "video_url": "/video/x.mp4"}));
}

/*
    Obiettivo test: le richieste accettano campi mancanti (validati dopo) e members assente vale lista vuota.
*/
#[test]
fn requests_tolerate_missing_fields() {
    let reg: RegisterRequest = json::from_str(r#"{"id":"alice","ip":"1.1.1.1"}"#).expect("deserialize");
    assert_eq!(reg.port, None);

    let group: CreateGroupRequest = json::from_str(r#"{"name":"team"}"#).expect("deserialize");
    assert!(group.members.is_empty());

    let group: CreateGroupRequest =
        json::from_str(r#"{"name":"team","members":["bob","alice","bob"]}"#).expect("deserialize");
    assert_eq!(group.member_set().len(), 2);
}

/*
    Obiettivo test: Error serializza code/message in camelCase e omette details se assente.
*/
#[test]
fn error_wire_shape() {
    let v = parse(&json::to_string(&Error::not_found("file not found: a.mp4")).expect("serialize"));
    assert_eq!(v, json::json!({"code": "not_found", "message": "file not found: a.mp4"}));

    let v = parse(&json::to_string(&Error::missing_field("to")).expect("serialize"));
    assert_eq!(v["details"]["field"], "to");
}
