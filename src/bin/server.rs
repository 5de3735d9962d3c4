use anyhow::Result;
use tracing_subscriber::EnvFilter;

use snmp_agent::agent::SnmpAgent;
use snmp_agent::oid::Oid;
use snmp_agent::snmp::SnmpValue;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Port 161 needs privileges; default to an unprivileged one.
    let agent = SnmpAgent::new("0.0.0.0:16100", vec!["public".to_string()])?;

    agent.register(
        Oid::from([1, 3, 6, 1, 2, 1, 1, 1, 0]),
        SnmpValue::OctetString(b"Rust SNMP agent".to_vec()),
    );
    agent.register(Oid::from([1, 3, 6, 1, 2, 1, 1, 3, 0]), SnmpValue::TimeTicks(0));
    agent.register(
        Oid::from([1, 3, 6, 1, 2, 1, 1, 4, 0]),
        SnmpValue::OctetString(b"admin@example.com".to_vec()),
    );

    agent.run()
}
