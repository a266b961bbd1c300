//! Tests for host/port substitution

use super::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn hp(host: &str, port: u16) -> HostAndPort {
    HostAndPort::new(host, port)
}

#[rstest]
#[case::postgres(
    "jdbc:postgresql://localhost:5432/test",
    hp("localhost", 5432),
    hp("postgres", 5432),
    "jdbc:postgresql://postgres:5432/test"
)]
#[case::no_path("jdbc:mysql://localhost:32768", hp("localhost", 32768), hp("mysql", 3306), "jdbc:mysql://mysql:3306")]
#[case::query_string(
    "jdbc:mysql://localhost:32768/app?useSSL=false&allowPublicKeyRetrieval=true",
    hp("localhost", 32768),
    hp("mysql", 3306),
    "jdbc:mysql://mysql:3306/app?useSSL=false&allowPublicKeyRetrieval=true"
)]
#[case::credentials_kept(
    "jdbc:mysql://root:pw@localhost:32768/app",
    hp("localhost", 32768),
    hp("mysql", 3306),
    "jdbc:mysql://root:pw@mysql:3306/app"
)]
#[case::sqlserver_properties(
    "jdbc:sqlserver://localhost:49200;databaseName=master;trustServerCertificate=true",
    hp("localhost", 49200),
    hp("mssql", 1433),
    "jdbc:sqlserver://mssql:1433;databaseName=master;trustServerCertificate=true"
)]
#[case::ipv6(
    "jdbc:postgresql://[2001:db8::1]:5432/db",
    hp("2001:db8::1", 5432),
    hp("2001:db8::2", 5433),
    "jdbc:postgresql://[2001:db8::2]:5433/db"
)]
#[case::ipv6_to_name(
    "jdbc:postgresql://[::1]:5432/db",
    hp("::1", 5432),
    hp("postgres", 5432),
    "jdbc:postgresql://postgres:5432/db"
)]
#[case::name_to_ipv6(
    "jdbc:postgresql://localhost:5432/db",
    hp("localhost", 5432),
    hp("::1", 15432),
    "jdbc:postgresql://[::1]:15432/db"
)]
#[case::only_first_authority(
    "jdbc:postgresql://localhost:5432/db?fallback=//localhost:5432",
    hp("localhost", 5432),
    hp("pg", 6432),
    "jdbc:postgresql://pg:6432/db?fallback=//localhost:5432"
)]
fn test_replace_standard(
    #[case] url: &str,
    #[case] old: HostAndPort,
    #[case] new: HostAndPort,
    #[case] expected: &str,
) {
    assert_eq!(replace_host_port(url, &old, &new), expected);
}

#[test]
fn test_replace_oracle_sid() {
    assert_eq!(
        replace_host_port(
            "jdbc:oracle:thin:@oldhost:1521:ORCL",
            &hp("oldhost", 1521),
            &hp("newhost", 1540)
        ),
        "jdbc:oracle:thin:@newhost:1540:ORCL"
    );
}

#[test]
fn test_replace_oracle_sid_keeps_credentials() {
    assert_eq!(
        replace_host_port(
            "jdbc:oracle:thin:scott/tiger@oldhost:1521:ORCL",
            &hp("oldhost", 1521),
            &hp("newhost", 1540)
        ),
        "jdbc:oracle:thin:scott/tiger@newhost:1540:ORCL"
    );
}

#[test]
fn test_replace_oracle_service_name() {
    assert_eq!(
        replace_host_port(
            "jdbc:oracle:thin:@//oldhost:1521/service",
            &hp("oldhost", 1521),
            &hp("newhost", 1541)
        ),
        "jdbc:oracle:thin:@//newhost:1541/service"
    );
}

#[test]
fn test_replace_oracle_service_name_without_service() {
    assert_eq!(
        replace_host_port(
            "jdbc:oracle:thin:@//oldhost:1521",
            &hp("oldhost", 1521),
            &hp("newhost", 1541)
        ),
        "jdbc:oracle:thin:@//newhost:1541"
    );
}

#[test]
fn test_replace_description_rewrites_every_address() {
    let url = "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS_LIST=\
               (ADDRESS=(PROTOCOL=TCP)(HOST=oldhost)(PORT=1521))\
               (ADDRESS=(PROTOCOL=TCP)(HOST=oldhost)(PORT=1521)))\
               (CONNECT_DATA=(SERVICE_NAME=svc)))";
    let expected = "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS_LIST=\
                    (ADDRESS=(PROTOCOL=TCP)(HOST=newhost)(PORT=1541))\
                    (ADDRESS=(PROTOCOL=TCP)(HOST=newhost)(PORT=1541)))\
                    (CONNECT_DATA=(SERVICE_NAME=svc)))";

    assert_eq!(
        replace_host_port(url, &hp("oldhost", 1521), &hp("newhost", 1541)),
        expected
    );
}

#[test]
fn test_replace_description_substitutes_host_and_port_independently() {
    let url = "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(HOST=a)(PORT=1521))(ADDRESS=(HOST=b)(PORT=1521)))";
    assert_eq!(
        replace_host_port(url, &hp("a", 1521), &hp("c", 2000)),
        "jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(HOST=c)(PORT=2000))(ADDRESS=(HOST=b)(PORT=2000)))"
    );
}

#[rstest]
#[case::wrong_host("jdbc:postgresql://localhost:5432/test")]
#[case::ipv6("jdbc:postgresql://[2001:db8::1]:5432/db")]
#[case::no_port("jdbc:postgresql://localhost/test")]
#[case::not_a_url("not-a-url")]
#[case::empty("")]
#[case::sid("jdbc:oracle:thin:@oldhost:1521:ORCL")]
#[case::sid_too_many_parts("jdbc:oracle:thin:@elsewhere:9999:ORCL:extra")]
#[case::service_name("jdbc:oracle:thin:@//oldhost:1521/service")]
#[case::description("jdbc:oracle:thin:@(DESCRIPTION=(ADDRESS=(HOST=oldhost)(PORT=1521)))")]
#[case::description_lowercase("jdbc:oracle:thin:@(description=(address=(host=elsewhere)(port=9999)))")]
fn test_replace_mismatch_returns_input(#[case] url: &str) {
    let old = hp("elsewhere", 9999);
    let new = hp("newhost", 1);
    assert_eq!(replace_host_port(url, &old, &new), url);
}

#[test]
fn test_replace_requires_both_host_and_port_to_match() {
    let url = "jdbc:postgresql://localhost:5432/test";
    assert_eq!(replace_host_port(url, &hp("localhost", 5433), &hp("pg", 1)), url);
    assert_eq!(replace_host_port(url, &hp("pg", 5432), &hp("pg", 1)), url);
}

#[test]
fn test_replace_sid_needs_exactly_three_parts() {
    let url = "jdbc:oracle:thin:@oldhost:1521:ORCL:extra";
    assert_eq!(
        replace_host_port(url, &hp("oldhost", 1521), &hp("newhost", 1540)),
        url
    );
}
