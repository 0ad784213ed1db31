//! Integration tests for frameworks_time_server crate
//!
//! Runs the worker loop against a stand-in gateway on loopback TCP.

use adapters_gateway::{messages, GatewayError, Session, SessionConfig, SessionListener};
use adapters_socket::{bind_tcp, FramedTransport};
use entities_terms::{Atom, Pid, Term};
use frameworks_time_server::serve;
use std::thread;

fn request(n: i64) -> Term {
    Term::tuple(vec![
        Term::atom("time_request"),
        Term::Pid(Pid { node: Atom::new("gateway@localhost"), id: 80, serial: 0, creation: 1 }),
        Term::from(n),
        Term::nil(),
    ])
}

#[test]
fn test_serves_until_gateway_closes() {
    let addr = "127.0.0.1:0".parse().unwrap();
    let listener = SessionListener::bind(addr, SessionConfig::default()).unwrap();
    let port = listener.local_addr().unwrap().port();

    let gateway = thread::spawn(move || {
        let (mut session, _) = listener.accept().unwrap();
        let registration = session.recv().unwrap();
        assert_eq!(registration, messages::register_with_group("clock"));

        let mut replies = Vec::new();
        for n in 0..3 {
            session.send(&request(n)).unwrap();
            // Not a request: skipped without a reply
            session.send(&Term::atom("noise")).unwrap();
            replies.push(session.recv().unwrap());
        }
        session.close();
        replies
    });

    let mut worker = Session::connect("127.0.0.1", port).unwrap();
    let served = serve(&mut worker, "clock", || "2024-01-01 00:00:00".to_string()).unwrap();
    assert_eq!(served, 3);

    let replies = gateway.join().unwrap();
    for (n, reply) in replies.into_iter().enumerate() {
        let expected = Term::tuple(vec![
            Term::atom("response"),
            request(0).as_tuple().unwrap().get(1).unwrap().clone(),
            Term::from(n as i64),
            Term::from("2024-01-01 00:00:00"),
        ]);
        assert_eq!(reply, expected);
    }
}

#[test]
fn test_garbage_from_gateway_is_an_error() {
    let listener = bind_tcp("127.0.0.1:0".parse().unwrap(), 8).unwrap();
    let port = listener.local_addr().unwrap().port();

    let gateway = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut transport = FramedTransport::new(stream);
        transport.read_frame().unwrap();
        // Version byte 130 is not an external term
        transport.write_frame(&[130, 97, 1]).unwrap();
        transport
    });

    let mut worker = Session::connect("127.0.0.1", port).unwrap();
    let result = serve(&mut worker, "clock", String::new);
    let _transport = gateway.join().unwrap();
    assert!(matches!(result, Err(GatewayError::Codec(_))));
    assert!(!worker.is_open());
}
