use serde::Deserialize;

/// Top-level nephele configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct NepheleConfig {
    /// Disaggregation settings.
    #[serde(default)]
    pub disagg: DisaggToml,

    /// Monthly storm shapes, required by the triangle precipitation method.
    #[serde(default)]
    pub storm: Option<StormToml>,

    /// Temperatures of the days just outside the record.
    #[serde(default)]
    pub bounds: BoundsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisaggToml {
    #[serde(default = "default_time_step")]
    pub time_step: u32,
    #[serde(default = "default_prec_type")]
    pub prec_type: String,
    #[serde(default = "default_lw_type")]
    pub lw_type: String,
    #[serde(default = "default_lw_cloud")]
    pub lw_cloud: String,
    #[serde(default = "default_tmax_daylength_fraction")]
    pub tmax_daylength_fraction: f64,
    #[serde(default)]
    pub theta_l: f64,
    #[serde(default)]
    pub theta_s: f64,
}

impl Default for DisaggToml {
    fn default() -> Self {
        Self {
            time_step: default_time_step(),
            prec_type: default_prec_type(),
            lw_type: default_lw_type(),
            lw_cloud: default_lw_cloud(),
            tmax_daylength_fraction: default_tmax_daylength_fraction(),
            theta_l: 0.0,
            theta_s: 0.0,
        }
    }
}

fn default_time_step() -> u32 {
    60
}
fn default_prec_type() -> String {
    "uniform".to_string()
}
fn default_lw_type() -> String {
    "prata".to_string()
}
fn default_lw_cloud() -> String {
    "cloud_deardorff".to_string()
}
fn default_tmax_daylength_fraction() -> f64 {
    0.67
}

/// Storm duration and peak time per month, in minutes, January first.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StormToml {
    pub duration: Vec<f64>,
    pub peak_time: Vec<f64>,
}

/// Each side is `[t_min, t_max]`.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BoundsToml {
    #[serde(default)]
    pub t_begin: Option<[f64; 2]>,
    #[serde(default)]
    pub t_end: Option<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: NepheleConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.disagg.time_step, 60);
        assert_eq!(cfg.disagg.prec_type, "uniform");
        assert_eq!(cfg.disagg.lw_type, "prata");
        assert_eq!(cfg.disagg.lw_cloud, "cloud_deardorff");
        assert_eq!(cfg.disagg.tmax_daylength_fraction, 0.67);
        assert!(cfg.storm.is_none());
        assert!(cfg.bounds.t_begin.is_none());
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = toml::from_str::<NepheleConfig>("[disagg]\nstep = 30\n");
        assert!(err.is_err());
        let err = toml::from_str::<NepheleConfig>("[output]\npath = \"x\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn full_document() {
        let text = r#"
            [disagg]
            time_step = 30
            prec_type = "TRIANGLE"
            lw_type = "TVA"
            lw_cloud = "DEFAULT"
            tmax_daylength_fraction = 0.6
            theta_l = -105.0
            theta_s = -120.0

            [storm]
            duration = [120.0, 120.0, 120.0, 120.0, 120.0, 120.0, 120.0, 120.0, 120.0, 120.0, 120.0, 120.0]
            peak_time = [720.0, 720.0, 720.0, 720.0, 720.0, 720.0, 720.0, 720.0, 720.0, 720.0, 720.0, 720.0]

            [bounds]
            t_begin = [1.0, 9.0]
        "#;
        let cfg: NepheleConfig = toml::from_str(text).unwrap();
        assert_eq!(cfg.disagg.time_step, 30);
        assert_eq!(cfg.disagg.theta_s, -120.0);
        assert_eq!(cfg.storm.unwrap().duration.len(), 12);
        assert_eq!(cfg.bounds.t_begin, Some([1.0, 9.0]));
        assert!(cfg.bounds.t_end.is_none());
    }
}
