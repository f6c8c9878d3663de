use crate::{
    ClientError, ClientResult, ProfileOverrides, ProfileRead, SessionClient, SessionKey,
    UserProfile,
};

use chrono::{SecondsFormat, Utc};
use log::{debug, info, warn};

impl SessionClient {
    /// Store a credential by hand, with a placeholder profile.
    ///
    /// `None` stores the fallback credential. The profile is the placeholder
    /// record with `overrides` applied on top. No network call is made.
    pub fn set_token(&self, token: Option<&str>, overrides: ProfileOverrides) -> ClientResult<()> {
        let token = token.unwrap_or(&self.fallback_credential);
        if token.is_empty() {
            return Err(ClientError::invalid_input("token cannot be empty"));
        }

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let user = UserProfile::placeholder(&now).with_overrides(overrides);

        self.persist(token, &user)?;
        info!("Token set manually for {}", user.username);
        Ok(())
    }

    /// Drop the stored credential and profile.
    ///
    /// Both removals are attempted; the first failure is returned.
    pub fn logout(&self) -> ClientResult<()> {
        let token = self.store.remove(SessionKey::Token);
        let user = self.store.remove(SessionKey::User);
        token?;
        user?;
        info!("Logged out");
        Ok(())
    }

    /// Stored profile, or `None` when missing, unparsable or unreadable.
    pub fn get_current_user(&self) -> Option<UserProfile> {
        match self.read_profile() {
            Ok(ProfileRead::Loaded(user)) => Some(user),
            Ok(ProfileRead::Missing) => {
                debug!("No stored user");
                None
            }
            Ok(ProfileRead::Corrupted(reason)) => {
                warn!("Stored user is not a valid profile: {reason}");
                None
            }
            Err(e) => {
                warn!("Could not read stored user: {e}");
                None
            }
        }
    }

    /// Read the stored profile, keeping "missing" and "corrupted" apart.
    pub fn read_profile(&self) -> ClientResult<ProfileRead> {
        let Some(raw) = self.store.get(SessionKey::User)? else {
            return Ok(ProfileRead::Missing);
        };

        Ok(match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => ProfileRead::Loaded(user),
            Err(e) => ProfileRead::Corrupted(e.to_string()),
        })
    }

    /// True iff a credential is stored. Does not check it with the backend.
    pub fn is_logged_in(&self) -> bool {
        self.get_token().is_some()
    }

    /// Stored credential, if any.
    pub fn get_token(&self) -> Option<String> {
        self.load_token().unwrap_or_else(|e| {
            warn!("Could not read stored token: {e}");
            None
        })
    }

    /// Read the stored credential. An empty entry counts as absent.
    pub fn load_token(&self) -> ClientResult<Option<String>> {
        let token = self.store.get(SessionKey::Token)?;
        Ok(token.filter(|t| !t.is_empty()))
    }

    /// Write credential and profile as a pair.
    ///
    /// If the profile write fails the credential entry is put back to what
    /// it held before, so a failed write leaves the previous session intact.
    pub(crate) fn persist(&self, token: &str, user: &UserProfile) -> ClientResult<()> {
        let user_json = serde_json::to_string(user)?;

        let previous_token = self.store.get(SessionKey::Token).unwrap_or_else(|e| {
            warn!("Could not read stored token before overwrite: {e}");
            None
        });

        self.store.set(SessionKey::Token, token)?;
        if let Err(e) = self.store.set(SessionKey::User, &user_json) {
            let restored = match previous_token.as_deref() {
                Some(previous) => self.store.set(SessionKey::Token, previous),
                None => self.store.remove(SessionKey::Token),
            };
            if let Err(rollback) = restored {
                warn!("Could not restore token after failed session write: {rollback}");
            }
            return Err(e.into());
        }

        debug!("Session stored for {}", user.username);
        Ok(())
    }
}
