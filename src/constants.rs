// Fixed configuration for the experience. Everything here is a design
// constant; there is no runtime or environment configuration.

// Canvas element the renderer draws into.
pub const CANVAS_ID: &str = "experience-canvas";

// Camera lens shared by every scene endpoint.
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Third-party form relay. The access key is a public client-side credential
// issued by the relay service, not a secret.
pub const FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const FORM_ACCESS_KEY: &str = "4496e452-08ae-49f0-9a79-a51be532597d";

pub const SUBMIT_ERROR_TEXT: &str =
    "There was an error sending your message. Please try again or reach out directly.";
