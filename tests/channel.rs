mod tests {
    use myrtio_light_dashboard::channel::{Channel, Latest, TryReceiveError, TrySendError};
    use myrtio_light_dashboard::{GameSnapshot, InputHub};

    #[test]
    fn test_channel_fifo() {
        let channel: Channel<char, 2> = Channel::new();
        assert!(channel.is_empty());
        assert_eq!(channel.try_send('q'), Ok(()));
        assert_eq!(channel.try_send('w'), Ok(()));
        assert_eq!(channel.try_send('e'), Err(TrySendError('e')));
        assert_eq!(channel.len(), 2);

        assert_eq!(channel.try_receive(), Ok('q'));
        assert_eq!(channel.try_receive(), Ok('w'));
        assert_eq!(channel.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_latest_keeps_newest() {
        let latest: Latest<u32> = Latest::new();
        assert_eq!(latest.take(), None);

        latest.publish(1);
        latest.publish(2);
        assert_eq!(latest.take(), Some(2));
        assert_eq!(latest.take(), None);
    }

    #[test]
    fn test_input_hub() {
        let hub = InputHub::<2>::new();
        let receiver = hub.receiver();
        assert!(receiver.take_snapshot().is_none());

        hub.telemetry_sender()
            .publish(GameSnapshot::with_health(10.0, 100.0));
        hub.telemetry_sender()
            .publish(GameSnapshot::with_health(20.0, 100.0));
        let snapshot = receiver.take_snapshot().unwrap();
        assert_eq!(snapshot.stats.current_health, 20.0);
        assert!(receiver.take_snapshot().is_none());

        let keys = hub.key_sender();
        keys.try_send('q').unwrap();
        keys.try_send('r').unwrap();
        assert!(keys.try_send('e').is_err());
        assert_eq!(receiver.next_key(), Some('q'));
        assert_eq!(receiver.next_key(), Some('r'));
        assert_eq!(receiver.next_key(), None);
    }
}
