mod reservation;
