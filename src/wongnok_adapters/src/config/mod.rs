pub mod settings;

pub use settings::{
    ApplicationSetting, AuthServiceSetting, AuthSetting, PostgresSetting, ShutdownSetting,
};
