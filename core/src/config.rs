#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub instance: InstanceConfig,

	#[serde(default)]
	pub datasource: DatasourceConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct InstanceConfig {
	#[serde_inline_default("askr".into())]
	/// instance name, shown in page titles
	pub name: String,

	#[serde_inline_default("http://127.0.0.1:3000".into())]
	/// domain of current instance, must change this for prod
	pub domain: String,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct DatasourceConfig {
	#[serde_inline_default("https://cloud.appwrite.io/v1".into())]
	/// base url of the document store rest api
	pub endpoint: String,

	#[serde(default)]
	/// project id sent with every store request
	pub project: String,

	#[serde(default)]
	/// server api key, needs read access to documents and users
	pub api_key: String,

	#[serde_inline_default("main".into())]
	/// database id holding the collections below
	pub database: String,

	#[serde_inline_default("questions".into())]
	pub questions_collection: String,

	#[serde_inline_default("answers".into())]
	pub answers_collection: String,

	#[serde_inline_default("votes".into())]
	pub votes_collection: String,

	#[serde_inline_default(30u64)]
	/// max time, in seconds, before store requests fail with timeout
	pub request_timeout_seconds: u64,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

#[cfg(test)]
mod test {
	use super::Config;

	#[test]
	fn empty_config_gets_usable_defaults() {
		let config: Config = toml::from_str("").unwrap();

		assert_eq!(config.datasource.endpoint, "https://cloud.appwrite.io/v1");
		assert_eq!(config.datasource.questions_collection, "questions");
		assert_eq!(config.datasource.request_timeout_seconds, 30);
		assert_eq!(config.instance.name, "askr");
	}

	#[test]
	fn partial_config_keeps_remaining_defaults() {
		let config: Config = toml::from_str(
			"[datasource]\nendpoint = \"http://localhost/v1\"\nproject = \"qa\"\n",
		)
		.unwrap();

		assert_eq!(config.datasource.endpoint, "http://localhost/v1");
		assert_eq!(config.datasource.project, "qa");
		assert_eq!(config.datasource.votes_collection, "votes");
	}
}
