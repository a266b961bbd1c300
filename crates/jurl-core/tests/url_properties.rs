//! Cross-cutting properties of parse and replace_host_port.
//!
//! These run every combination of scheme, host and port through both
//! functions to check that they agree with each other.

use jurl_core::{HostAndPort, JurlError, UrlDialect, parse, replace_host_port};
use rstest::rstest;

fn build_url(scheme: &str, hp: &HostAndPort, db: &str) -> String {
    format!("jdbc:{}://{}/{}", scheme, hp, db)
}

#[rstest]
fn parse_then_replace_round_trips(
    #[values(
        ("postgresql", "org.postgresql.Driver"),
        ("mysql", "com.mysql.cj.jdbc.Driver"),
        ("mariadb", "org.mariadb.jdbc.Driver"),
        ("clickhouse", "com.clickhouse.jdbc.ClickHouseDriver")
    )]
    scheme_driver: (&str, &str),
    #[values("localhost", "db-1.internal", "10.0.0.7", "2001:db8::1")] host: &str,
    #[values(0, 1521, 5432, 65535)] port: u16,
) {
    let (scheme, driver) = scheme_driver;
    let original = HostAndPort::new(host, port);
    let url = build_url(scheme, &original, "app");

    assert_eq!(parse(driver, &url).unwrap(), original);

    let target = HostAndPort::new("container-alias", 15000);
    let rewritten = replace_host_port(&url, &original, &target);
    assert_eq!(rewritten, build_url(scheme, &target, "app"));
    assert_eq!(parse(driver, &rewritten).unwrap(), target);
}

#[rstest]
fn replace_is_identity_when_old_is_absent(
    #[values(
        "jdbc:postgresql://localhost:5432/test",
        "jdbc:postgresql://[2001:db8::1]:5432/db",
        "jdbc:sqlserver://localhost:1433;databaseName=app",
        "jdbc:oracle:thin:@oldhost:1521:ORCL",
        "jdbc:oracle:thin:@//oldhost:1521/service",
        "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST=oldhost)(PORT=1521)))",
        "jdbc:h2:mem:test",
        "not-a-url",
        ""
    )]
    url: &str,
    #[values(("absent", 1521), ("localhost", 1), ("2001:db8::1", 5433))] old: (&str, u16),
) {
    let old = HostAndPort::from(old);
    let new = HostAndPort::new("newhost", 4242);
    assert_eq!(replace_host_port(url, &old, &new), url);
}

#[rstest]
#[case::sid("jdbc:oracle:thin:@oldhost:1521:ORCL")]
#[case::service_name("jdbc:oracle:thin:@//oldhost:1521/service")]
#[case::description("jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST=oldhost)(PORT=1521))(CONNECT_DATA=(SID=ORCL)))")]
fn oracle_forms_round_trip(#[case] url: &str) {
    let driver = "oracle.jdbc.OracleDriver";
    let old = parse(driver, url).unwrap();
    assert_eq!(old, HostAndPort::new("oldhost", 1521));

    let new = HostAndPort::new("newhost", 1541);
    let rewritten = replace_host_port(url, &old, &new);
    assert_ne!(rewritten, url);
    assert_eq!(parse(driver, &rewritten).unwrap(), new);
    assert_eq!(UrlDialect::detect(&rewritten), UrlDialect::detect(url));
}

#[test]
fn replace_ignores_driver_and_sniffs_shape() {
    // No driver name is involved: the Oracle SID shape is recognised from
    // the text even though a non-Oracle driver could never parse it.
    let url = "jdbc:oracle:thin:@oldhost:1521:ORCL";
    assert!(matches!(
        parse("org.postgresql.Driver", url),
        Err(JurlError::InvalidUrl { .. })
    ));
    assert_eq!(
        replace_host_port(
            url,
            &HostAndPort::new("oldhost", 1521),
            &HostAndPort::new("newhost", 1540)
        ),
        "jdbc:oracle:thin:@newhost:1540:ORCL"
    );
}
