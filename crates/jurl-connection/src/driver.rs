//! Catalogue of well-known JDBC drivers

/// A JDBC driver the toolkit knows defaults for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JdbcDriver {
    Postgres,
    MySql,
    MariaDb,
    SqlServer,
    Oracle,
    ClickHouse,
    Db2,
    /// H2 in TCP server mode (`jdbc:h2:tcp://`)
    H2,
}

impl JdbcDriver {
    pub const ALL: [JdbcDriver; 8] = [
        JdbcDriver::Postgres,
        JdbcDriver::MySql,
        JdbcDriver::MariaDb,
        JdbcDriver::SqlServer,
        JdbcDriver::Oracle,
        JdbcDriver::ClickHouse,
        JdbcDriver::Db2,
        JdbcDriver::H2,
    ];

    /// Short identifier (e.g., "postgres", "mysql")
    pub fn id(&self) -> &'static str {
        match self {
            JdbcDriver::Postgres => "postgres",
            JdbcDriver::MySql => "mysql",
            JdbcDriver::MariaDb => "mariadb",
            JdbcDriver::SqlServer => "mssql",
            JdbcDriver::Oracle => "oracle",
            JdbcDriver::ClickHouse => "clickhouse",
            JdbcDriver::Db2 => "db2",
            JdbcDriver::H2 => "h2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JdbcDriver::Postgres => "PostgreSQL",
            JdbcDriver::MySql => "MySQL",
            JdbcDriver::MariaDb => "MariaDB",
            JdbcDriver::SqlServer => "MS SQL Server",
            JdbcDriver::Oracle => "Oracle",
            JdbcDriver::ClickHouse => "ClickHouse",
            JdbcDriver::Db2 => "IBM Db2",
            JdbcDriver::H2 => "H2",
        }
    }

    /// Current driver class name
    pub fn class_name(&self) -> &'static str {
        self.class_names()[0]
    }

    /// Every class name the driver has shipped under, current one first
    pub fn class_names(&self) -> &'static [&'static str] {
        match self {
            JdbcDriver::Postgres => &["org.postgresql.Driver"],
            JdbcDriver::MySql => &["com.mysql.cj.jdbc.Driver", "com.mysql.jdbc.Driver"],
            JdbcDriver::MariaDb => &["org.mariadb.jdbc.Driver"],
            JdbcDriver::SqlServer => &["com.microsoft.sqlserver.jdbc.SQLServerDriver"],
            JdbcDriver::Oracle => &["oracle.jdbc.OracleDriver", "oracle.jdbc.driver.OracleDriver"],
            JdbcDriver::ClickHouse => &[
                "com.clickhouse.jdbc.ClickHouseDriver",
                "ru.yandex.clickhouse.ClickHouseDriver",
            ],
            JdbcDriver::Db2 => &["com.ibm.db2.jcc.DB2Driver"],
            JdbcDriver::H2 => &["org.h2.Driver"],
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            JdbcDriver::Postgres => 5432,
            JdbcDriver::MySql | JdbcDriver::MariaDb => 3306,
            JdbcDriver::SqlServer => 1433,
            JdbcDriver::Oracle => 1521,
            JdbcDriver::ClickHouse => 8123,
            JdbcDriver::Db2 => 50000,
            JdbcDriver::H2 => 9092,
        }
    }

    /// Prefix every URL for this driver starts with
    pub fn url_prefix(&self) -> &'static str {
        match self {
            JdbcDriver::Postgres => "jdbc:postgresql:",
            JdbcDriver::MySql => "jdbc:mysql:",
            JdbcDriver::MariaDb => "jdbc:mariadb:",
            JdbcDriver::SqlServer => "jdbc:sqlserver:",
            JdbcDriver::Oracle => "jdbc:oracle:",
            JdbcDriver::ClickHouse => "jdbc:clickhouse:",
            JdbcDriver::Db2 => "jdbc:db2:",
            JdbcDriver::H2 => "jdbc:h2:",
        }
    }

    pub fn from_class_name(class_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|driver| driver.class_names().contains(&class_name))
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|driver| driver.id().eq_ignore_ascii_case(id))
    }

    /// Guess the driver from a URL prefix
    pub fn from_url(url: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|driver| url.starts_with(driver.url_prefix()))
    }
}
